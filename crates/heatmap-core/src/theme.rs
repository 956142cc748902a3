// File: crates/heatmap-core/src/theme.rs
// Summary: Color themes for the heat map (page, axes, variance buckets, tooltip, error placard).

use skia_safe as skia;

use crate::bucket::VarianceBucket;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub title: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub cold: skia::Color,
    pub cool: skia::Color,
    pub warm: skia::Color,
    pub hot: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_text: skia::Color,
    pub error_background: skia::Color,
    pub error_text: skia::Color,
}

impl Theme {
    /// White page with the CSS named colors of the reference chart.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: skia::Color::from_argb(255, 255, 255, 255),
            title: skia::Color::from_argb(255, 0, 0, 0),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            cold: skia::Color::from_argb(255, 70, 130, 180),  // SteelBlue
            cool: skia::Color::from_argb(255, 176, 196, 222), // LightSteelBlue
            warm: skia::Color::from_argb(255, 255, 165, 0),   // Orange
            hot: skia::Color::from_argb(255, 220, 20, 60),    // Crimson
            tooltip_background: skia::Color::from_argb(230, 40, 40, 45),
            tooltip_text: skia::Color::from_argb(255, 250, 250, 252),
            error_background: skia::Color::from_argb(255, 253, 236, 234),
            error_text: skia::Color::from_argb(255, 160, 20, 20),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            title: skia::Color::from_argb(255, 235, 235, 245),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            cold: skia::Color::from_argb(255, 64, 120, 200),
            cool: skia::Color::from_argb(255, 140, 170, 210),
            warm: skia::Color::from_argb(255, 240, 150, 40),
            hot: skia::Color::from_argb(255, 220, 60, 70),
            tooltip_background: skia::Color::from_argb(235, 250, 250, 252),
            tooltip_text: skia::Color::from_argb(255, 20, 20, 30),
            error_background: skia::Color::from_argb(255, 40, 16, 18),
            error_text: skia::Color::from_argb(255, 255, 120, 120),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            title: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            cold: skia::Color::from_argb(255, 0x00, 0x66, 0xff),
            cool: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            warm: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            hot: skia::Color::from_argb(255, 0xff, 0x00, 0x00),
            tooltip_background: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tooltip_text: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            error_background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            error_text: skia::Color::from_argb(255, 0xff, 0x00, 0x00),
        }
    }

    pub fn bucket_color(&self, bucket: VarianceBucket) -> skia::Color {
        match bucket {
            VarianceBucket::Cold => self.cold,
            VarianceBucket::Cool => self.cool,
            VarianceBucket::Warm => self.warm,
            VarianceBucket::Hot => self.hot,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark(), Theme::high_contrast()]
}

/// Preset whose `name` matches, ignoring case.
pub fn lookup(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    lookup(name).unwrap_or_else(Theme::classic)
}

/// `#rrggbb` form for SVG attributes.
pub fn hex(c: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}
