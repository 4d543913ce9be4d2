//! Navigation Parameter Definitions
//!
//! # Parameters
//!
//! - `WP_LOITER_RAD` - Loiter radius in meters. A negative value selects
//!   counter-clockwise loiters (**visible in GCS**)
//!
//! # ArduPilot Compatibility
//!
//! Matches ArduPlane's `WP_LOITER_RAD` name, units and range.

use super::error::ParameterError;
use super::storage::{ParamFlags, ParamValue, ParameterStore};

const DEFAULT_LOITER_RADIUS: f32 = 60.0;

const MIN_LOITER_RADIUS: f32 = -32767.0;
const MAX_LOITER_RADIUS: f32 = 32767.0;

/// Navigation parameters loaded from parameter store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavParams {
    /// Loiter radius in meters; sign selects direction (ArduPilot: WP_LOITER_RAD)
    pub loiter_radius: f32,
}

impl Default for NavParams {
    fn default() -> Self {
        Self {
            loiter_radius: DEFAULT_LOITER_RADIUS,
        }
    }
}

impl NavParams {
    /// Register navigation parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            "WP_LOITER_RAD",
            ParamValue::Float(DEFAULT_LOITER_RADIUS),
            ParamFlags::empty(),
        )?;
        Ok(())
    }

    /// Load navigation parameters, clamping out-of-range values
    pub fn from_store(store: &ParameterStore) -> Self {
        let loiter_radius = store
            .get_f32("WP_LOITER_RAD")
            .filter(|v| v.is_finite())
            .map_or(DEFAULT_LOITER_RADIUS, |v| {
                v.clamp(MIN_LOITER_RADIUS, MAX_LOITER_RADIUS)
            });

        Self { loiter_radius }
    }
}
