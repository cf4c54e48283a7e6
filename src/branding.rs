use serde::{Deserialize, Serialize};

use crate::error::SearchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Light and optional dark variant of an image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetUrls {
    pub default: Option<String>,
    pub dark: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branding {
    #[serde(default)]
    pub logo: AssetUrls,
    #[serde(default)]
    pub icon: AssetUrls,
}

/// Which image to show for the network logo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoSource {
    Image {
        url: String,
        /// Light image reused in dark mode; render it inverted
        invert: bool,
    },
    /// No usable asset configured
    Placeholder,
}

impl LogoSource {
    /// Glyph used where the image cannot be drawn
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Image { .. } => "◆",
            Self::Placeholder => "◇",
        }
    }
}

fn resolve(asset: &AssetUrls, mode: ColorMode) -> Result<LogoSource, SearchError> {
    let default = asset
        .default
        .as_deref()
        .filter(|u| !u.trim().is_empty());

    match (mode, asset.dark.as_deref().filter(|u| !u.trim().is_empty())) {
        (ColorMode::Dark, Some(dark)) => Ok(LogoSource::Image {
            url: dark.to_string(),
            invert: false,
        }),
        (mode, _) => default
            .map(|url| LogoSource::Image {
                url: url.to_string(),
                invert: mode == ColorMode::Dark,
            })
            .ok_or_else(|| SearchError::Config("no logo configured".into())),
    }
}

impl Branding {
    /// Full-size logo for `mode`, or the placeholder when none is configured
    pub fn logo(&self, mode: ColorMode) -> LogoSource {
        resolve(&self.logo, mode).unwrap_or(LogoSource::Placeholder)
    }

    /// Collapsed icon for `mode`, or the placeholder
    pub fn icon(&self, mode: ColorMode) -> LogoSource {
        resolve(&self.icon, mode).unwrap_or(LogoSource::Placeholder)
    }
}
