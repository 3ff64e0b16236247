use std::collections::HashMap;

use shared::{domain::CommandId, error::ConfigError};

/// Slash commands the bot knows how to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Drink,
    HoldMyBeer,
    Ascii,
}

impl Command {
    /// Order in which commands are advertised in the greeting.
    pub const ALL: [Command; 3] = [Command::Drink, Command::HoldMyBeer, Command::Ascii];

    pub fn slash_name(self) -> &'static str {
        match self {
            Command::Drink => "drink",
            Command::HoldMyBeer => "holdmybeer",
            Command::Ascii => "ascii",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Drink => "display a drink",
            Command::HoldMyBeer => "tell the room to hold your beer",
            Command::Ascii => "ascii print a message",
        }
    }
}

/// Ids the platform assigned to each command when the bot was registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandIds {
    pub hold_my_beer: CommandId,
    pub drink: CommandId,
    pub ascii: CommandId,
}

impl Default for CommandIds {
    fn default() -> Self {
        Self {
            hold_my_beer: CommandId(1),
            drink: CommandId(2),
            ascii: CommandId(3),
        }
    }
}

impl CommandIds {
    fn assignments(&self) -> [(CommandId, Command); 3] {
        [
            (self.hold_my_beer, Command::HoldMyBeer),
            (self.drink, Command::Drink),
            (self.ascii, Command::Ascii),
        ]
    }
}

/// Dispatch table from platform command id to command.
#[derive(Debug, Clone)]
pub struct CommandTable {
    by_id: HashMap<CommandId, Command>,
}

impl CommandTable {
    pub fn from_ids(ids: CommandIds) -> Result<Self, ConfigError> {
        let mut by_id = HashMap::new();
        for (id, command) in ids.assignments() {
            if let Some(existing) = by_id.insert(id, command) {
                return Err(ConfigError::DuplicateCommandId {
                    id,
                    first: existing.slash_name(),
                    second: command.slash_name(),
                });
            }
        }
        Ok(Self { by_id })
    }

    pub fn lookup(&self, id: CommandId) -> Option<Command> {
        self.by_id.get(&id).copied()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self {
            by_id: CommandIds::default().assignments().into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
