// Concrete command implementations

use crate::command::state::HomeState;
use crate::command::trait_def::{CommandError, CommandResult, UndoableCommand};

/// Command to switch the light on
///
/// Undo switches the light back off.
pub struct LightOnCommand;

impl UndoableCommand for LightOnCommand {
    fn execute(&mut self, state: &mut HomeState) -> CommandResult<()> {
        state.light.turn_on();
        Ok(())
    }

    fn undo(&mut self, state: &mut HomeState) -> CommandResult<()> {
        state.light.turn_off();
        Ok(())
    }

    fn description(&self) -> String {
        "Switch the light on".to_string()
    }
}

/// Command to switch the light off
pub struct LightOffCommand;

impl UndoableCommand for LightOffCommand {
    fn execute(&mut self, state: &mut HomeState) -> CommandResult<()> {
        state.light.turn_off();
        Ok(())
    }

    fn undo(&mut self, state: &mut HomeState) -> CommandResult<()> {
        state.light.turn_on();
        Ok(())
    }

    fn description(&self) -> String {
        "Switch the light off".to_string()
    }
}

/// Command to open the door
pub struct DoorOpenCommand;

impl UndoableCommand for DoorOpenCommand {
    fn execute(&mut self, state: &mut HomeState) -> CommandResult<()> {
        state.door.open();
        Ok(())
    }

    fn undo(&mut self, state: &mut HomeState) -> CommandResult<()> {
        state.door.close();
        Ok(())
    }

    fn description(&self) -> String {
        "Open the door".to_string()
    }
}

/// Command to close the door
pub struct DoorCloseCommand;

impl UndoableCommand for DoorCloseCommand {
    fn execute(&mut self, state: &mut HomeState) -> CommandResult<()> {
        state.door.close();
        Ok(())
    }

    fn undo(&mut self, state: &mut HomeState) -> CommandResult<()> {
        state.door.open();
        Ok(())
    }

    fn description(&self) -> String {
        "Close the door".to_string()
    }
}

/// Command to raise the thermostat by one degree
///
/// Stores the previous temperature on execute so undo restores it exactly,
/// even when the thermostat saturated at its upper bound.
pub struct TempUpCommand {
    old_temp: Option<i32>,
}

impl TempUpCommand {
    pub fn new() -> Self {
        Self { old_temp: None }
    }
}

impl Default for TempUpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoableCommand for TempUpCommand {
    fn execute(&mut self, state: &mut HomeState) -> CommandResult<()> {
        // Store old value for undo
        self.old_temp = Some(state.thermostat.temperature());
        state.thermostat.increase();
        Ok(())
    }

    fn undo(&mut self, state: &mut HomeState) -> CommandResult<()> {
        let old_temp = self
            .old_temp
            .ok_or_else(|| CommandError::UndoFailed("no previous temperature stored".into()))?;
        state.thermostat.restore(old_temp);
        Ok(())
    }

    fn description(&self) -> String {
        "Raise the thermostat".to_string()
    }
}

/// Command to lower the thermostat by one degree
///
/// Stores the previous temperature on execute so undo restores it exactly,
/// even when the thermostat saturated at its lower bound.
pub struct TempDownCommand {
    old_temp: Option<i32>,
}

impl TempDownCommand {
    pub fn new() -> Self {
        Self { old_temp: None }
    }
}

impl Default for TempDownCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoableCommand for TempDownCommand {
    fn execute(&mut self, state: &mut HomeState) -> CommandResult<()> {
        // Store old value for undo
        self.old_temp = Some(state.thermostat.temperature());
        state.thermostat.decrease();
        Ok(())
    }

    fn undo(&mut self, state: &mut HomeState) -> CommandResult<()> {
        let old_temp = self
            .old_temp
            .ok_or_else(|| CommandError::UndoFailed("no previous temperature stored".into()))?;
        state.thermostat.restore(old_temp);
        Ok(())
    }

    fn description(&self) -> String {
        "Lower the thermostat".to_string()
    }
}
