use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Command, Result, TscError};

pub const PLACEHOLDER_CODE: &str = "<NEW";
pub const PLACEHOLDER_NAME: &str = "NEW command";

/// Checks that no two commands share a code.
/// Positions in the error are 1-based.
pub fn validate_unique_codes(commands: &[Command]) -> Result<()> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(commands.len());
    for (i, cmd) in commands.iter().enumerate() {
        if let Some(first) = seen.insert(cmd.code.as_str(), i) {
            return Err(TscError::DuplicateCode {
                first: first + 1,
                second: i + 1,
                code: cmd.code.clone(),
            });
        }
    }
    Ok(())
}

/// Ordered list of commands, owned by whoever edits it.
///
/// Removing a command removes it from the list, there are no deleted placeholders
/// that have to be filtered before saving.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CommandList {
    commands: Vec<Command>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the commands as they are. Call [`CommandList::validate`] if they come from an untrusted source.
    pub fn from_commands(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn validate(&self) -> Result<()> {
        validate_unique_codes(&self.commands)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Command> {
        self.commands.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    pub fn as_slice(&self) -> &[Command] {
        &self.commands
    }

    pub fn into_inner(self) -> Vec<Command> {
        self.commands
    }

    pub fn find(&self, code: &str) -> Option<usize> {
        self.commands.iter().position(|cmd| cmd.code == code)
    }

    /// Appends a command and returns its index.
    pub fn push(&mut self, cmd: Command) -> Result<usize> {
        cmd.check_text_fields()?;
        if self.find(&cmd.code).is_some() {
            return Err(TscError::CodeInUse(cmd.code));
        }
        self.commands.push(cmd);
        Ok(self.commands.len() - 1)
    }

    /// Appends the blank `<NEW` command new entries start out as.
    pub fn add_placeholder(&mut self) -> Result<usize> {
        self.push(Command::new(PLACEHOLDER_CODE, PLACEHOLDER_NAME))
    }

    pub fn remove(&mut self, index: usize) -> Option<Command> {
        if index >= self.commands.len() {
            return None;
        }
        Some(self.commands.remove(index))
    }

    /// Replaces the command at `index`. Fails if any other command already uses the new code.
    pub fn replace(&mut self, index: usize, cmd: Command) -> Result<()> {
        if index >= self.commands.len() {
            return Err(TscError::IndexOutOfRange { index, len: self.commands.len() });
        }
        cmd.check_text_fields()?;
        if self.commands.iter().enumerate().any(|(i, other)| i != index && other.code == cmd.code) {
            return Err(TscError::CodeInUse(cmd.code));
        }
        self.commands[index] = cmd;
        Ok(())
    }

    pub fn sort_by_code(&mut self) {
        self.commands.sort_by(|a, b| a.code.cmp(&b.code));
    }
}

impl<'a> IntoIterator for &'a CommandList {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl AsRef<[Command]> for CommandList {
    fn as_ref(&self) -> &[Command] {
        &self.commands
    }
}
