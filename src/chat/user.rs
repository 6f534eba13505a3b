// Chat participants

/// Capability required to take part in a chat room.
///
/// The room addresses participants only through this trait; it never
/// needs to know what a participant does with a delivered message.
pub trait Participant {
    /// Name the participant is registered under
    fn name(&self) -> &str;

    /// Deliver a message sent by another participant
    fn receive(&mut self, from: &str, body: &str);
}

/// A console chat user.
///
/// Delivered messages are printed and kept in an inbox, oldest first.
pub struct ChatUser {
    name: String,
    inbox: Vec<String>,
}

impl ChatUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inbox: Vec::new(),
        }
    }

    /// Messages delivered to this user so far
    pub fn inbox(&self) -> &[String] {
        &self.inbox
    }
}

impl Participant for ChatUser {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&mut self, from: &str, body: &str) {
        println!("{} received a message from {}: {}", self.name, from, body);
        self.inbox.push(format!("{from}: {body}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receive_fills_inbox_in_order() {
        let mut user = ChatUser::new("Alice");
        user.receive("Bob", "hi");
        user.receive("Charlie", "hello");

        assert_eq!(user.inbox(), ["Bob: hi", "Charlie: hello"]);
    }

    #[test]
    fn test_name() {
        let user = ChatUser::new("Alice");
        assert_eq!(user.name(), "Alice");
    }
}
