//! Application configuration for the demo.

use std::path::{Path, PathBuf};

use easel_core::EditorConfig;
use serde::Deserialize;

use crate::error::DemoError;

/// Gap between the curve plot and the gradient strip, in logical pixels.
const WIDGET_GAP: f32 = 16.0;

/// Runtime configuration for the easel demo host.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Optional JSON file with `curve` / `gradient` widget settings.
    pub config_path: Option<PathBuf>,
    /// Pointer script to replay. Reads stdin when unset.
    pub script_path: Option<PathBuf>,
    /// Directory to write widget previews to. No previews when unset.
    pub preview_dir: Option<PathBuf>,
    /// Log filter overriding `RUST_LOG`.
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_path: std::env::var_os("EASEL_CONFIG").map(PathBuf::from),
            script_path: std::env::var_os("EASEL_SCRIPT").map(PathBuf::from),
            preview_dir: std::env::var_os("EASEL_PREVIEW_DIR").map(PathBuf::from),
            log_filter: std::env::var("EASEL_LOG").ok(),
        }
    }
}

/// Widget layout and defaults, as read from the config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct WidgetsFile {
    curve: Option<serde_json::Value>,
    gradient: Option<serde_json::Value>,
}

/// Resolved configuration for both widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfigs {
    pub curve: EditorConfig,
    pub gradient: EditorConfig,
}

impl Default for WidgetConfigs {
    /// Curve on top, gradient strip below it.
    fn default() -> Self {
        let curve = EditorConfig::curve();
        let gradient = EditorConfig {
            y: curve.y + curve.height + WIDGET_GAP,
            ..EditorConfig::gradient()
        };
        Self { curve, gradient }
    }
}

impl WidgetConfigs {
    pub fn load(path: Option<&Path>) -> Result<Self, DemoError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)?;
        let configs = Self::from_json(&text)?;
        tracing::info!(path = %path.display(), "loaded widget configuration");
        Ok(configs)
    }

    pub fn from_json(json: &str) -> Result<Self, DemoError> {
        let file: WidgetsFile = serde_json::from_str(json)?;
        let defaults = Self::default();

        let curve = match file.curve {
            Some(patch) => EditorConfig::from_json(&patch.to_string(), defaults.curve)?,
            None => defaults.curve,
        };
        let gradient = match file.gradient {
            Some(patch) => EditorConfig::from_json(&patch.to_string(), defaults.gradient)?,
            None => defaults.gradient,
        };
        Ok(Self { curve, gradient })
    }
}
