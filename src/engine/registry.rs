//! Insertion-ordered storage for registered command handlers.

use super::command::Command;

/// The set of commands an engine can dispatch to, addressable by both of
/// their accepted names. Lookup is linear; the registry stays small by
/// construction and insertion order gives deterministic first-match
/// semantics.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        CommandRegistry {
            commands: Vec::new(),
        }
    }

    /// Add a command. Silently ignored when a command with the same caller
    /// and alias is already present, so registration chains can run
    /// unconditionally without duplicate guards.
    pub fn register(&mut self, command: Box<dyn Command>) {
        if self.exists(command.caller(), command.alias()) {
            return;
        }
        self.commands.push(command);
    }

    /// True when a command answering to exactly this caller/alias pair is
    /// registered.
    pub fn exists(&self, caller: &str, alias: &str) -> bool {
        self.commands
            .iter()
            .any(|command| command.caller() == caller && command.alias() == alias)
    }

    /// Resolve `name` as a caller first, then as an alias. Returns the
    /// command's registry index together with the handle.
    pub fn find(&self, name: &str) -> Option<(usize, &dyn Command)> {
        self.commands
            .iter()
            .position(|command| command.caller() == name)
            .or_else(|| {
                self.commands
                    .iter()
                    .position(|command| command.alias() == name)
            })
            .map(|index| (index, self.commands[index].as_ref()))
    }

    pub fn find_by_caller(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|command| command.caller() == name)
            .map(|command| command.as_ref())
    }

    pub fn find_by_alias(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|command| command.alias() == name)
            .map(|command| command.as_ref())
    }

    pub fn get(&self, index: usize) -> Option<&dyn Command> {
        self.commands.get(index).map(|command| command.as_ref())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every registered name, caller then alias, in registration order.
    pub fn known_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands
            .iter()
            .flat_map(|command| [command.caller(), command.alias()])
    }
}
