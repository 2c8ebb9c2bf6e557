//! Per-window sizing policy supplied at open time

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::math::Size;

/// Sizing policy for a window
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WindowOptions {
    /// Hard lower bound on size
    pub min_size: Size,
    /// Hard upper bound on size (None = unbounded)
    pub max_size: Option<Size>,
    /// Fraction of the desktop width/height used for the initial size
    pub init_perc: Size,
    /// Width:height cap applied to the initial width
    #[serde(rename = "initRatioXY")]
    pub init_ratio_xy: f32,
    /// How far a window may be dragged past the left, right and bottom edges
    pub border_over_edge: f32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            min_size: Size::new(300.0, 200.0),
            max_size: None,
            init_perc: Size::new(0.9, 0.85),
            init_ratio_xy: 4.0 / 3.0,
            border_over_edge: 40.0,
        }
    }
}

impl WindowOptions {
    /// Parse options from JSON; an empty string yields the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Check the options without repairing them
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_non_negative(self.min_size.width) || !is_non_negative(self.min_size.height) {
            return Err(ConfigError::invalid("minSize", "must be finite and >= 0"));
        }
        if let Some(max) = self.max_size {
            if !(max.width >= self.min_size.width && max.height >= self.min_size.height) {
                return Err(ConfigError::invalid(
                    "maxSize",
                    format!(
                        "{}x{} is below minSize {}x{}",
                        max.width, max.height, self.min_size.width, self.min_size.height
                    ),
                ));
            }
        }
        if !is_fraction(self.init_perc.width) || !is_fraction(self.init_perc.height) {
            return Err(ConfigError::invalid("initPerc", "must be within (0, 1]"));
        }
        if !(self.init_ratio_xy.is_finite() && self.init_ratio_xy > 0.0) {
            return Err(ConfigError::invalid("initRatioXY", "must be finite and > 0"));
        }
        if !is_non_negative(self.border_over_edge) {
            return Err(ConfigError::invalid("borderOverEdge", "must be finite and >= 0"));
        }
        Ok(())
    }

    /// Repair the options so every invariant holds
    ///
    /// A max below min is raised to min; out-of-range values fall back to
    /// the defaults.
    pub fn normalized(self) -> Self {
        let defaults = WindowOptions::default();
        let min_size = self.min_size.sanitized();
        let max_size = self.max_size.map(|max| max.sanitized().max(min_size));

        let init_perc = Size::new(
            fraction_or(self.init_perc.width, defaults.init_perc.width),
            fraction_or(self.init_perc.height, defaults.init_perc.height),
        );
        let init_ratio_xy = if self.init_ratio_xy.is_finite() && self.init_ratio_xy > 0.0 {
            self.init_ratio_xy
        } else {
            defaults.init_ratio_xy
        };
        let border_over_edge = if is_non_negative(self.border_over_edge) {
            self.border_over_edge
        } else {
            defaults.border_over_edge
        };

        Self {
            min_size,
            max_size,
            init_perc,
            init_ratio_xy,
            border_over_edge,
        }
    }
}

fn is_non_negative(v: f32) -> bool {
    v.is_finite() && v >= 0.0
}

fn is_fraction(v: f32) -> bool {
    v.is_finite() && v > 0.0 && v <= 1.0
}

fn fraction_or(v: f32, fallback: f32) -> f32 {
    if is_fraction(v) {
        v
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(WindowOptions::default().validate().is_ok());
    }

    #[test]
    fn test_max_below_min_rejected() {
        let opts = WindowOptions {
            min_size: Size::new(300.0, 200.0),
            max_size: Some(Size::new(100.0, 500.0)),
            ..Default::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(ConfigError::Invalid { field: "maxSize", .. })
        ));
    }

    #[test]
    fn test_normalized_raises_max_to_min() {
        let opts = WindowOptions {
            min_size: Size::new(300.0, 200.0),
            max_size: Some(Size::new(100.0, 500.0)),
            ..Default::default()
        }
        .normalized();
        let max = opts.max_size.unwrap();
        assert!((max.width - 300.0).abs() < 0.001);
        assert!((max.height - 500.0).abs() < 0.001);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_normalized_repairs_garbage() {
        let opts = WindowOptions {
            min_size: Size::new(f32::NAN, -10.0),
            max_size: None,
            init_perc: Size::new(0.0, 3.0),
            init_ratio_xy: f32::INFINITY,
            border_over_edge: -1.0,
        }
        .normalized();
        assert!(opts.validate().is_ok());
        assert_eq!(opts.min_size, Size::ZERO);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(WindowOptions::from_json("").unwrap(), WindowOptions::default());
        let opts = WindowOptions::from_json(r#"{"initRatioXY":2.0,"borderOverEdge":10}"#).unwrap();
        assert!((opts.init_ratio_xy - 2.0).abs() < 0.001);
        assert!((opts.border_over_edge - 10.0).abs() < 0.001);
        assert!(matches!(WindowOptions::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_deserialize_partial() {
        let opts: WindowOptions =
            serde_json::from_str(r#"{"minSize":{"width":400,"height":300}}"#).unwrap();
        assert!((opts.min_size.width - 400.0).abs() < 0.001);
        assert!((opts.init_perc.width - 0.9).abs() < 0.001);
    }
}
