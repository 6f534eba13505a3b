// Pattern tour - library exports for tests and the demo binary

pub mod brewing;
pub mod chat;
pub mod command;
pub mod devices;

// Re-export commonly used types for convenience
pub use brewing::{Coffee, Recipe, Tea, make_drink};
pub use chat::{ChatRoom, ChatUser, Participant};
pub use command::{CommandManager, HomeState, UndoableCommand};
pub use devices::{Door, Light, Thermostat};
