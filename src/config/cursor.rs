//! Cursor follower configuration.
//!
//! Defaults reproduce the site as shipped: a 28px marker found via
//! `.cursor`, hover class `hover`, and a smoothing factor of `1.0`
//! (the marker snaps to the pointer every frame). Lower the factor for a
//! visible trail.

use lazy_static::lazy_static;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{FolioError, FolioResult};

/// Per-frame interpolation weight used when nothing else is configured.
pub const DEFAULT_SMOOTHING_FACTOR: f64 = 1.0;

/// Marker edge length in CSS pixels.
pub const DEFAULT_MARKER_SIZE: f64 = 28.0;

lazy_static! {
    /// Global cursor configuration, snapshotted by each new mount.
    pub static ref CURSOR_CONFIG: RwLock<CursorConfig> = RwLock::new(CursorConfig::default());
}

/// Tuning for the pointer follower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export, export_to = "../site/src/types/generated/")]
pub struct CursorConfig {
    /// Fraction of the remaining distance covered per frame, in `(0, 1]`.
    pub smoothing_factor: f64,
    /// Marker edge length; the marker is offset by half of it to center on the pointer.
    pub marker_size: f64,
    /// CSS selector locating the marker element.
    pub marker_selector: String,
    /// Class toggled on the marker while over an interactive element.
    pub hover_class: String,
    /// Tag names treated as interactive (case-insensitive).
    pub interactive_tags: Vec<String>,
    /// Classes treated as interactive.
    pub interactive_classes: Vec<String>,
    /// `role` attribute values treated as interactive.
    pub interactive_roles: Vec<String>,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            marker_size: DEFAULT_MARKER_SIZE,
            marker_selector: ".cursor".to_string(),
            hover_class: "hover".to_string(),
            interactive_tags: vec!["a".to_string(), "button".to_string()],
            interactive_classes: vec!["btn".to_string()],
            interactive_roles: vec!["button".to_string()],
        }
    }
}

impl CursorConfig {
    /// Parse a JSON object, filling omitted fields with defaults, and validate it.
    pub fn from_json(raw: &str) -> FolioResult<Self> {
        let config: CursorConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the follower cannot render with.
    pub fn validate(&self) -> FolioResult<()> {
        validate_smoothing_factor(self.smoothing_factor)?;

        if !self.marker_size.is_finite() || self.marker_size <= 0.0 {
            return Err(FolioError::InvalidConfig(format!(
                "markerSize must be positive, got {}",
                self.marker_size
            )));
        }

        if self.marker_selector.trim().is_empty() {
            return Err(FolioError::InvalidConfig(
                "markerSelector must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Half the marker size, the offset that centers the marker on the pointer.
    pub fn half_marker_size(&self) -> f64 {
        self.marker_size / 2.0
    }
}

/// Check that a smoothing factor lies in `(0, 1]`.
pub fn validate_smoothing_factor(factor: f64) -> FolioResult<()> {
    if factor.is_finite() && factor > 0.0 && factor <= 1.0 {
        Ok(())
    } else {
        Err(FolioError::InvalidConfig(format!(
            "smoothingFactor must be in (0, 1], got {}",
            factor
        )))
    }
}

// ============================================================================
// Global accessors
// ============================================================================

/// Snapshot of the global cursor configuration.
pub fn get_cursor_config() -> CursorConfig {
    CURSOR_CONFIG.read().clone()
}

/// Replace the global cursor configuration after validating it.
pub fn set_cursor_config(config: CursorConfig) -> FolioResult<()> {
    config.validate()?;
    log::debug!("[CONFIG] Cursor config updated: {:?}", config);
    *CURSOR_CONFIG.write() = config;
    Ok(())
}

/// Set the default smoothing factor used by subsequent mounts.
pub fn set_default_smoothing_factor(factor: f64) -> FolioResult<()> {
    validate_smoothing_factor(factor)?;
    log::debug!("[CONFIG] set_default_smoothing_factor({})", factor);
    CURSOR_CONFIG.write().smoothing_factor = factor;
    Ok(())
}
