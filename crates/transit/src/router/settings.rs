//! Routing configuration

use crate::models::types::{Result, TransitError};

const METERS_PER_KILOMETER: f64 = 1000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Parameters the routing graph is built with
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingSettings {
    /// Minutes spent waiting at a stop before each boarding
    #[cfg_attr(feature = "serde", serde(default = "default_bus_wait_time"))]
    pub bus_wait_time: u32,

    /// Average bus speed in km/h
    #[cfg_attr(feature = "serde", serde(default = "default_bus_velocity"))]
    pub bus_velocity: f64,
}

const fn default_bus_wait_time() -> u32 {
    6
}

const fn default_bus_velocity() -> f64 {
    40.0
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: default_bus_wait_time(),
            bus_velocity: default_bus_velocity(),
        }
    }
}

impl RoutingSettings {
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the velocity is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(TransitError::InvalidSettings(format!(
                "bus_velocity must be positive, got {}",
                self.bus_velocity
            )));
        }
        Ok(())
    }

    pub fn wait_minutes(&self) -> f64 {
        f64::from(self.bus_wait_time)
    }

    /// Minutes needed to ride `meters` at the configured velocity
    pub fn ride_minutes(&self, meters: u64) -> f64 {
        meters as f64 / (self.bus_velocity * METERS_PER_KILOMETER / MINUTES_PER_HOUR)
    }
}
