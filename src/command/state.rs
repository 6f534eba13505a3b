// HomeState - the devices that commands operate on

use crate::devices::{Door, Light, Thermostat};

/// Central mutable state of the smart-home demo.
///
/// The devices live here for the whole session and are only ever changed
/// through commands, which receive this struct by mutable reference.
/// Commands never own a device.
#[derive(Debug)]
pub struct HomeState {
    pub light: Light,
    pub door: Door,
    pub thermostat: Thermostat,
}

impl HomeState {
    /// Create all devices in their initial states
    pub fn new() -> Self {
        Self {
            light: Light::new(),
            door: Door::new(),
            thermostat: Thermostat::new(),
        }
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}
