//! Desktop-wide presentation constants

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Pointer distance from the left/right edge that arms a snap zone (px)
pub const SNAP_EDGE_THRESHOLD: f32 = 16.0;

/// Offset applied per cascade step when opening same-type windows (px)
pub const CASCADE_OFFSET: f32 = 20.0;

/// Delay before a newly opened window becomes visible (ms)
pub const OPEN_DELAY_MS: f64 = 100.0;

/// Delay between a close request and teardown, covering the exit transition (ms)
pub const CLOSE_DELAY_MS: f64 = 250.0;

/// Desktop configuration
///
/// Every field has a default, so hosts may supply any subset as JSON.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopConfig {
    /// Snap zone width at the left and right edges
    pub snap_edge_threshold: f32,
    /// Cascade step for same-type windows
    pub cascade_offset: f32,
    /// Open transition delay
    pub open_delay_ms: f64,
    /// Close transition delay
    pub close_delay_ms: f64,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            snap_edge_threshold: SNAP_EDGE_THRESHOLD,
            cascade_offset: CASCADE_OFFSET,
            open_delay_ms: OPEN_DELAY_MS,
            close_delay_ms: CLOSE_DELAY_MS,
        }
    }
}

impl DesktopConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject negative or non-finite values
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_f32("snapEdgeThreshold", self.snap_edge_threshold)?;
        check_f32("cascadeOffset", self.cascade_offset)?;
        check_f64("openDelayMs", self.open_delay_ms)?;
        check_f64("closeDelayMs", self.close_delay_ms)?;
        Ok(())
    }
}

fn check_f32(field: &'static str, value: f32) -> Result<(), ConfigError> {
    check_f64(field, value as f64)
}

fn check_f64(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::invalid(field, "must be finite"));
    }
    if value < 0.0 {
        return Err(ConfigError::invalid(field, format!("must be >= 0, got {}", value)));
    }
    Ok(())
}
