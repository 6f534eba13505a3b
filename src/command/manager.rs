// CommandManager - executes commands and tracks history for undo

use crate::command::state::HomeState;
use crate::command::trait_def::{CommandError, CommandResult, UndoableCommand};

/// Executes commands and records them for undo.
///
/// The manager keeps a single stack: every command that has been executed
/// and not yet undone, most recent on top. Undo is strictly
/// last-in-first-out and one level per call; there is no redo and no
/// branching.
pub struct CommandManager {
    /// Stack of commands that can be undone (most recent last)
    history: Vec<Box<dyn UndoableCommand>>,
}

impl CommandManager {
    /// Create a new manager with an empty history
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    /// Execute a command and push it onto the history.
    ///
    /// # Errors
    /// Returns the command's error if execution fails; a failed command is
    /// not recorded.
    pub fn execute(
        &mut self,
        mut command: Box<dyn UndoableCommand>,
        state: &mut HomeState,
    ) -> CommandResult<()> {
        command.execute(state)?;
        self.history.push(command);

        Ok(())
    }

    /// Undo the most recently executed command.
    ///
    /// Pops the command from the history, runs its `undo`, and returns the
    /// command's description for display. The command stays popped even if
    /// its `undo` reports a problem.
    ///
    /// # Errors
    /// Returns [`CommandError::NothingToUndo`] if the history is empty, or
    /// the command's own error if the undo fails.
    pub fn undo(&mut self, state: &mut HomeState) -> CommandResult<String> {
        let mut command = self.history.pop().ok_or(CommandError::NothingToUndo)?;

        let description = command.description();
        command.undo(state)?;

        Ok(description)
    }

    /// Check if there is a command that can be undone
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Get a description of the command that would be undone next
    pub fn undo_description(&self) -> Option<String> {
        self.history.last().map(|cmd| cmd.description())
    }

    /// Number of commands currently in the history
    pub fn undo_count(&self) -> usize {
        self.history.len()
    }

    /// Drop all recorded history
    pub fn clear(&mut self) {
        self.history.clear();
    }
}

impl Default for CommandManager {
    fn default() -> Self {
        Self::new()
    }
}
