// Light - binary on/off device

/// A light that can be switched on and off.
///
/// Each state change prints one status line.
#[derive(Debug, Default)]
pub struct Light {
    on: bool,
}

impl Light {
    /// Create a new light, initially off
    pub fn new() -> Self {
        Self { on: false }
    }

    /// Switch the light on
    pub fn turn_on(&mut self) {
        self.on = true;
        println!("[Light] switched on");
    }

    /// Switch the light off
    pub fn turn_off(&mut self) {
        self.on = false;
        println!("[Light] switched off");
    }

    /// Check whether the light is currently on
    pub fn is_on(&self) -> bool {
        self.on
    }
}
