// UndoableCommand trait definition

use crate::command::state::HomeState;

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur while executing or undoing commands
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Undo was requested with an empty history
    #[error("nothing to undo")]
    NothingToUndo,

    /// Command execution failed
    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    /// Undo operation failed
    #[error("undo failed: {0}")]
    UndoFailed(String),
}

/// Trait for reversible commands.
///
/// Every state-changing operation in the demo implements this trait so the
/// [`CommandManager`](crate::command::CommandManager) can record it.
/// `execute` applies the side effect against the shared device state;
/// `undo` applies its logical inverse.
///
/// # Example
/// ```
/// use pattern_tour::command::state::HomeState;
/// use pattern_tour::command::trait_def::{CommandResult, UndoableCommand};
///
/// struct LightFlick;
///
/// impl UndoableCommand for LightFlick {
///     fn execute(&mut self, state: &mut HomeState) -> CommandResult<()> {
///         state.light.turn_on();
///         Ok(())
///     }
///
///     fn undo(&mut self, state: &mut HomeState) -> CommandResult<()> {
///         state.light.turn_off();
///         Ok(())
///     }
///
///     fn description(&self) -> String {
///         "Flick the light on".to_string()
///     }
/// }
/// ```
pub trait UndoableCommand {
    /// Apply the command to the shared device state
    fn execute(&mut self, state: &mut HomeState) -> CommandResult<()>;

    /// Reverse the effect of a prior `execute`
    fn undo(&mut self, state: &mut HomeState) -> CommandResult<()>;

    /// Human-readable description of the command
    ///
    /// Used for display when an undo is reported (e.g., "Undo: Switch the
    /// light on").
    fn description(&self) -> String;
}
