// ChatRoom - central registry relaying messages between participants

use crate::chat::user::Participant;

/// Mediator between chat participants.
///
/// Participants never talk to each other directly: the room announces
/// joins and relays every message to all registered participants except
/// its sender.
pub struct ChatRoom {
    participants: Vec<Box<dyn Participant>>,
}

impl ChatRoom {
    /// Create an empty chat room
    pub fn new() -> Self {
        Self {
            participants: Vec::new(),
        }
    }

    /// Register a participant and announce the join
    pub fn register(&mut self, participant: Box<dyn Participant>) {
        println!("[System] {} joined the chat.", participant.name());
        self.participants.push(participant);
    }

    /// Broadcast a message to every participant except the sender.
    ///
    /// The sender is matched by name. A name nobody is registered under is
    /// delivered to everyone; the room does not validate senders.
    pub fn send(&mut self, sender: &str, body: &str) {
        println!("{sender} writes: {body}");
        for participant in &mut self.participants {
            if participant.name() != sender {
                participant.receive(sender, body);
            }
        }
    }

    /// Number of registered participants
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}

impl Default for ChatRoom {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    // Participant recording deliveries into a shared log
    struct RecordingParticipant {
        name: String,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Participant for RecordingParticipant {
        fn name(&self) -> &str {
            &self.name
        }

        fn receive(&mut self, from: &str, body: &str) {
            self.log
                .borrow_mut()
                .push(format!("{} got {}: {}", self.name, from, body));
        }
    }

    fn room_with(names: &[&str], log: &Rc<RefCell<Vec<String>>>) -> ChatRoom {
        let mut room = ChatRoom::new();
        for name in names {
            room.register(Box::new(RecordingParticipant {
                name: (*name).to_string(),
                log: Rc::clone(log),
            }));
        }
        room
    }

    fn new_log() -> Rc<RefCell<Vec<String>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn test_broadcast_skips_sender() {
        let log = new_log();
        let mut room = room_with(&["Alice", "Bob", "Charlie"], &log);

        room.send("Bob", "hello");

        // Delivered in registration order, sender excluded
        assert_eq!(
            *log.borrow(),
            vec!["Alice got Bob: hello", "Charlie got Bob: hello"]
        );
    }

    #[test]
    fn test_unknown_sender_reaches_everyone() {
        let log = new_log();
        let mut room = room_with(&["Alice", "Bob"], &log);

        room.send("Mallory", "knock knock");

        assert_eq!(
            *log.borrow(),
            vec!["Alice got Mallory: knock knock", "Bob got Mallory: knock knock"]
        );
    }

    #[test]
    fn test_register_counts_participants() {
        let log = new_log();
        let room = room_with(&["Alice", "Bob"], &log);
        assert_eq!(room.participant_count(), 2);
    }

    #[test]
    fn test_empty_room_broadcast_is_a_no_op() {
        let mut room = ChatRoom::new();
        room.send("Alice", "anyone here?");
        assert_eq!(room.participant_count(), 0);
    }
}
