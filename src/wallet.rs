//! Theme wiring for the external wallet-connection modal.
//!
//! The modal itself is provided by an outside library. It is opened once with
//! the project id, theme variables and featured wallets. After that the only
//! coupling is the color mode, which is forwarded whenever it changes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::branding::ColorMode;

pub const BODY_TYPEFACE: &str = "Inter";

/// Static modal settings, handed over once at creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Wallet-connect project id; the modal is disabled without one
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default = "default_featured_wallets")]
    pub featured_wallet_ids: Vec<String>,
    #[serde(default)]
    pub theme: ThemeVariables,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            featured_wallet_ids: default_featured_wallets(),
            theme: ThemeVariables::default(),
        }
    }
}

impl WalletConfig {
    pub fn is_enabled(&self) -> bool {
        self.project_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

fn default_featured_wallets() -> Vec<String> {
    vec![
        "c57ca95b47569778a828d19178114f4db188b89b763c899ba0be274e97267d96".to_string(),
        "971e689d0a5be527bac79629b4ee9b925e82208e5168b733496a09c0faed0709".to_string(),
        "20459438007b75f4f4acb98bf29aa3b800550309646d375da5fd4aac6c2a2c66".to_string(),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeVariables {
    pub font_family: String,
    pub accent: String,
    pub border_radius_master: String,
    pub z_index: u32,
}

impl Default for ThemeVariables {
    fn default() -> Self {
        Self {
            font_family: format!("{BODY_TYPEFACE}, sans-serif"),
            accent: "#2B6CB0".to_string(),
            border_radius_master: "2px".to_string(),
            z_index: 1400,
        }
    }
}

/// Handle to the wallet modal
pub trait WalletModal {
    /// Create the modal with its static settings
    fn open(&mut self, project_id: &str, theme: &ThemeVariables, featured: &[String]);

    fn set_theme_mode(&mut self, mode: ColorMode);
}

/// Modal handle used when no wallet library is attached; records what it is given
#[derive(Debug, Default)]
pub struct DetachedModal {
    pub project_id: Option<String>,
    pub theme: Option<ThemeVariables>,
    pub featured_wallet_ids: Vec<String>,
    pub mode: Option<ColorMode>,
}

impl WalletModal for DetachedModal {
    fn open(&mut self, project_id: &str, theme: &ThemeVariables, featured: &[String]) {
        debug!(project_id, wallets = featured.len(), "wallet modal opened");
        self.project_id = Some(project_id.to_string());
        self.theme = Some(theme.clone());
        self.featured_wallet_ids = featured.to_vec();
    }

    fn set_theme_mode(&mut self, mode: ColorMode) {
        debug!(mode = mode.as_str(), "wallet modal theme");
        self.mode = Some(mode);
    }
}

/// Keeps the modal's theme in step with the application color mode
pub struct ThemeSync<M: WalletModal> {
    modal: Option<M>,
    last: Option<ColorMode>,
}

impl<M: WalletModal> ThemeSync<M> {
    /// `modal` is only opened and attached when the wallet feature is enabled
    pub fn new(config: &WalletConfig, mut modal: M) -> Self {
        let modal = match config.project_id.as_deref() {
            Some(project_id) if config.is_enabled() => {
                modal.open(project_id, &config.theme, &config.featured_wallet_ids);
                Some(modal)
            }
            _ => None,
        };
        Self { modal, last: None }
    }

    pub fn is_attached(&self) -> bool {
        self.modal.is_some()
    }

    /// Forward `mode` if it differs from what the modal last saw
    pub fn sync(&mut self, mode: ColorMode) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };
        if self.last == Some(mode) {
            return;
        }
        modal.set_theme_mode(mode);
        self.last = Some(mode);
    }

    pub fn modal(&self) -> Option<&M> {
        self.modal.as_ref()
    }
}
