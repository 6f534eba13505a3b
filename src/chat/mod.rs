// Mediator - chat room broadcasting between participants

pub mod room;
pub mod user;

pub use room::ChatRoom;
pub use user::{ChatUser, Participant};
