// File: crates/heatmap-loader/src/lib.rs
// Summary: One-shot retrieval of the temperature document (HTTP GET or local file).

pub mod error;

use std::path::Path;
use std::time::Duration;

use heatmap_core::Dataset;
use reqwest::Client;
use tracing::{debug, info};

pub use error::{ErrorKind, LoadError};

/// Public copy of the monthly global land-surface temperature series.
pub const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

#[derive(Clone, Debug)]
pub struct LoaderConfig {
    /// Whole-request timeout; `None` waits as long as the transport does.
    pub timeout: Option<Duration>,
    pub user_agent: String,
    /// Honour HTTP(S)_PROXY / NO_PROXY from the environment.
    pub use_system_proxy: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: concat!("heatmap-loader/", env!("CARGO_PKG_VERSION")).to_string(),
            use_system_proxy: true,
        }
    }
}

/// Fetches and validates datasets. No retries: a failure is returned to the caller as-is.
pub struct Loader {
    client: Client,
}

impl Loader {
    pub fn new(config: &LoaderConfig) -> Result<Self, LoadError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(LoadError::Client)?;
        Ok(Self { client })
    }

    /// One GET to `url`; the body must be the temperature document.
    pub async fn fetch(&self, url: &str) -> Result<Dataset, LoadError> {
        info!(url, "fetching dataset");
        let fetch_err = |source| LoadError::FetchFailed { url: url.to_string(), source };

        let resp = self.client.get(url).send().await.map_err(fetch_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus { url: url.to_string(), status: status.as_u16() });
        }
        let body = resp.bytes().await.map_err(fetch_err)?;
        debug!(url, bytes = body.len(), "response received");

        let dataset = Dataset::from_json_slice(&body)?;
        info!(url, records = dataset.len(), base = dataset.base_temperature, "dataset loaded");
        Ok(dataset)
    }
}

/// Read and validate a local copy of the document.
pub async fn load_path(path: &Path) -> Result<Dataset, LoadError> {
    info!(path = %path.display(), "reading dataset");
    let body = tokio::fs::read(path).await.map_err(|source| LoadError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = Dataset::from_json_slice(&body)?;
    info!(path = %path.display(), records = dataset.len(), "dataset loaded");
    Ok(dataset)
}

/// Where to get the document from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(std::path::PathBuf),
}

impl Source {
    pub async fn load(&self, config: &LoaderConfig) -> Result<Dataset, LoadError> {
        match self {
            Source::Url(url) => Loader::new(config)?.fetch(url).await,
            Source::File(path) => load_path(path).await,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Source::Url(url) => url.clone(),
            Source::File(path) => path.display().to_string(),
        }
    }
}
