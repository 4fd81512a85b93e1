//! Routing configuration.

use tc_core::{CoreError, CoreResult};

/// Fixed parameters of the time model.
///
/// Every ride leg costs `bus_wait_time` minutes of waiting plus the ride
/// itself at a constant `bus_velocity`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingSettings {
    /// Minutes spent waiting at the boarding stop, once per leg.
    pub bus_wait_time: u32,
    /// Bus speed in km/h.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Validated constructor.
    ///
    /// # Errors
    /// [`CoreError::Config`] if `bus_velocity` is not a positive finite number.
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> CoreResult<Self> {
        let settings = Self { bus_wait_time, bus_velocity };
        settings.validate()?;
        Ok(settings)
    }

    /// Check values that may have bypassed [`new`](Self::new), e.g. after
    /// deserialization.
    ///
    /// # Errors
    /// [`CoreError::Config`] if `bus_velocity` is not a positive finite number.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(CoreError::Config(format!(
                "bus_velocity must be positive, got {}",
                self.bus_velocity
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn wait_minutes(&self) -> f64 {
        f64::from(self.bus_wait_time)
    }

    /// Minutes needed to ride `meters` at `bus_velocity`.
    ///
    /// Evaluated as `(meters * 60) / (1000 * bus_velocity)` so results are
    /// reproducible bit for bit.
    #[inline]
    pub fn ride_minutes(&self, meters: u64) -> f64 {
        (meters as f64 * 60.0) / (1000.0 * self.bus_velocity)
    }
}
