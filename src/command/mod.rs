// Command pattern with undo
//
// All state-changing operations in the smart-home demo go through
// UndoableCommand so the manager can record them for reversal.
//
// Architecture:
// - UndoableCommand trait: execute(), undo(), description()
// - CommandManager: owns the undo history
// - Concrete commands: LightOnCommand, DoorOpenCommand, TempUpCommand, ...

pub mod commands;
pub mod manager;
pub mod state;
pub mod trait_def;

pub use manager::CommandManager;
pub use state::HomeState;
pub use trait_def::UndoableCommand;
