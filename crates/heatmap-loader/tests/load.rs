// File: crates/heatmap-loader/tests/load.rs
// Purpose: Fetch against a throwaway local HTTP server and file loading; error classification.

use std::path::PathBuf;

use heatmap_loader::{load_path, ErrorKind, LoadError, Loader, LoaderConfig, Source};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const DOC: &str = r#"{"baseTemperature":8.66,"monthlyVariance":[{"year":1950,"month":6,"variance":-0.5},{"year":2000,"month":1,"variance":1.2}]}"#;

/// Serves exactly one HTTP/1.1 response, then closes. Returns the base URL.
async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.expect("accept");
        let mut buf = vec![0u8; 4096];
        let mut seen = Vec::new();
        loop {
            let n = sock.read(&mut buf).await.expect("read");
            if n == 0 {
                break;
            }
            seen.extend_from_slice(&buf[..n]);
            if seen.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let resp = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        sock.write_all(resp.as_bytes()).await.expect("write");
        sock.shutdown().await.ok();
    });
    format!("http://{addr}/global-temperature.json")
}

fn loader() -> Loader {
    let config = LoaderConfig { use_system_proxy: false, ..LoaderConfig::default() };
    Loader::new(&config).expect("client")
}

#[tokio::test]
async fn fetch_returns_validated_dataset() {
    let url = serve_once("200 OK", DOC).await;
    let ds = loader().fetch(&url).await.expect("dataset");
    assert_eq!(ds.base_temperature, 8.66);
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.year_range(), Some((1950, 2000)));
}

#[tokio::test]
async fn non_success_status_is_fetch_failed() {
    let url = serve_once("404 Not Found", "missing").await;
    let err = loader().fetch(&url).await.unwrap_err();
    assert!(matches!(err, LoadError::HttpStatus { status: 404, .. }), "got {err:?}");
    assert_eq!(err.kind(), ErrorKind::FetchFailed);
}

#[tokio::test]
async fn garbage_body_is_parse_failed() {
    let url = serve_once("200 OK", "<html>not json</html>").await;
    let err = loader().fetch(&url).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParseFailed);
}

#[tokio::test]
async fn empty_records_are_empty_dataset() {
    let url = serve_once("200 OK", r#"{"baseTemperature":8.66,"monthlyVariance":[]}"#).await;
    let err = loader().fetch(&url).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyDataset);
}

#[tokio::test]
async fn refused_connection_is_fetch_failed() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let l = TcpListener::bind("127.0.0.1:0").await.unwrap();
        l.local_addr().unwrap().port()
    };
    let err = loader().fetch(&format!("http://127.0.0.1:{port}/x.json")).await.unwrap_err();
    assert!(matches!(err, LoadError::FetchFailed { .. }), "got {err:?}");
    assert_eq!(err.kind(), ErrorKind::FetchFailed);
}

#[tokio::test]
async fn file_source_loads_and_missing_file_fails() {
    let dir = std::env::temp_dir().join(format!("heatmap-loader-{}", std::process::id()));
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let path = dir.join("global-temperature.json");
    tokio::fs::write(&path, DOC).await.unwrap();

    let ds = Source::File(path.clone()).load(&LoaderConfig::default()).await.expect("file dataset");
    assert_eq!(ds.len(), 2);

    let err = load_path(&PathBuf::from("/definitely/not/here.json")).await.unwrap_err();
    assert!(matches!(err, LoadError::ReadFailed { .. }));
    assert_eq!(err.kind(), ErrorKind::FetchFailed);

    tokio::fs::remove_dir_all(&dir).await.ok();
}

#[test]
fn bad_client_config_is_its_own_error() {
    let config = LoaderConfig { user_agent: "bad\nagent".to_string(), ..LoaderConfig::default() };
    let err = Loader::new(&config).err().expect("invalid user agent rejected");
    assert!(matches!(err, LoadError::Client(_)));
    assert_eq!(err.kind(), ErrorKind::FetchFailed);
    assert!(err.to_string().starts_with("cannot build HTTP client"));
}
