use colored::Colorize;
use pattern_tour::brewing::{Coffee, Tea, make_drink};
use pattern_tour::chat::{ChatRoom, ChatUser};
use pattern_tour::command::commands::{
    DoorOpenCommand, LightOffCommand, LightOnCommand, TempUpCommand,
};
use pattern_tour::command::{CommandManager, HomeState, UndoableCommand};

fn main() {
    println!("{}", "=== Pattern tour ===".bold());

    command_demo();
    brewing_demo();
    chat_demo();

    println!("\n{}", "=== End of tour ===".bold());
}

/// Command: reversible smart-home actions with one level of undo
fn command_demo() {
    println!("\n{}", "-- Command --".cyan().bold());

    let mut state = HomeState::new();
    let mut manager = CommandManager::new();

    run(&mut manager, &mut state, Box::new(LightOnCommand));
    run(&mut manager, &mut state, Box::new(DoorOpenCommand));
    run(&mut manager, &mut state, Box::new(TempUpCommand::new()));
    undo_last(&mut manager, &mut state);
    run(&mut manager, &mut state, Box::new(LightOffCommand));
}

fn run(manager: &mut CommandManager, state: &mut HomeState, command: Box<dyn UndoableCommand>) {
    if let Err(err) = manager.execute(command, state) {
        eprintln!("command failed: {err}");
    }
}

fn undo_last(manager: &mut CommandManager, state: &mut HomeState) {
    match manager.undo(state) {
        Ok(description) => println!("Undo: {description}"),
        Err(err) => println!("{err}"),
    }
}

/// Template Method: one brewing skeleton, two beverages
fn brewing_demo() {
    println!("\n{}", "-- Template Method --".cyan().bold());

    println!("Making tea:");
    make_drink(&Tea);

    println!("Making coffee:");
    make_drink(&Coffee);
}

/// Mediator: a chat room relaying messages to everyone but the sender
fn chat_demo() {
    println!("{}", "-- Mediator --".cyan().bold());

    let mut room = ChatRoom::new();
    room.register(Box::new(ChatUser::new("Alice")));
    room.register(Box::new(ChatUser::new("Bob")));
    room.register(Box::new(ChatUser::new("Charlie")));

    room.send("Alice", "Hi everyone!");
    room.send("Bob", "Hey, how is it going?");
    room.send("Charlie", "All good, wrapping up the patterns lab.");
}
