#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ParameterType, Result, TscError};

/// Number of parameter slots every command carries.
pub const MAX_PARAMETERS: usize = 4;

/// Upper bound for the length of a used parameter.
pub const MAX_PARAMETER_LENGTH: u32 = 4;

pub(crate) const DEFAULT_PARAMETER_LENGTH: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Parameter {
    pub parameter_type: ParameterType,
    /// Only meaningful if `parameter_type` isn't [`ParameterType::None`], must be 1..=4 then.
    pub length: u32,
}

impl Parameter {
    pub fn new(parameter_type: ParameterType, length: u32) -> Self {
        Self { parameter_type, length }
    }

    pub fn is_used(&self) -> bool {
        !self.parameter_type.is_none()
    }
}

impl Default for Parameter {
    fn default() -> Self {
        Self {
            parameter_type: ParameterType::None,
            length: DEFAULT_PARAMETER_LENGTH,
        }
    }
}

/// A single TSC command definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Command {
    /// The unique key, e.g. `<MSG`.
    pub code: String,
    pub name: String,
    pub description: String,
    pub parameters: [Parameter; MAX_PARAMETERS],

    pub ends_event: bool,
    pub clears_textbox: bool,
    pub params_are_separated: bool,
}

impl Default for Command {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            description: String::new(),
            parameters: [Parameter::default(); MAX_PARAMETERS],
            ends_event: false,
            clears_textbox: false,
            params_are_separated: true,
        }
    }
}

impl Command {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the next free leading slot. Returns `None` if all slots are taken.
    pub fn with_parameter(mut self, parameter: Parameter) -> Option<Self> {
        let slot = self.param_count();
        if slot >= MAX_PARAMETERS {
            return None;
        }
        self.parameters[slot] = parameter;
        Some(self)
    }

    /// Number of leading used parameter slots.
    /// Slots following the first unused one don't count, even if they carry a type.
    pub fn param_count(&self) -> usize {
        self.parameters.iter().take_while(|p| p.is_used()).count()
    }

    pub fn active_parameters(&self) -> &[Parameter] {
        &self.parameters[..self.param_count()]
    }

    /// Tabs separate the fields and line breaks the records, neither can be stored in a text field.
    pub fn check_text_fields(&self) -> Result<()> {
        for (field, value) in [("Code", &self.code), ("Name", &self.name), ("Description", &self.description)] {
            if value.contains(['\t', '\n', '\r']) {
                return Err(TscError::InvalidCharacter {
                    code: self.code.clone(),
                    field,
                });
            }
        }
        Ok(())
    }

    /// `"<code> - <name>"`, the way commands are shown in lists.
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cmd = Command::default();
        assert!(!cmd.ends_event);
        assert!(!cmd.clears_textbox);
        assert!(cmd.params_are_separated);
        assert_eq!(cmd.param_count(), 0);
        for p in &cmd.parameters {
            assert_eq!(*p, Parameter::new(ParameterType::None, 4));
        }
    }

    #[test]
    fn test_param_count_stops_at_gap() {
        let mut cmd = Command::new("<TST", "Test");
        cmd.parameters[0] = Parameter::new(ParameterType::Flag, 4);
        cmd.parameters[2] = Parameter::new(ParameterType::Event, 4);
        assert_eq!(cmd.param_count(), 1);
        assert_eq!(cmd.active_parameters(), &[Parameter::new(ParameterType::Flag, 4)]);
    }

    #[test]
    fn test_with_parameter() {
        let mut cmd = Some(Command::new("<ALL", "All"));
        for _ in 0..MAX_PARAMETERS {
            cmd = cmd.and_then(|c| c.with_parameter(Parameter::new(ParameterType::Number, 2)));
        }
        let cmd = cmd.unwrap();
        assert_eq!(cmd.param_count(), 4);
        assert!(cmd.with_parameter(Parameter::new(ParameterType::Number, 2)).is_none());
    }

    #[test]
    fn test_check_text_fields() {
        assert!(Command::new("<MSG", "Message").with_description("Opens the box").check_text_fields().is_ok());

        let err = Command::new("<A", "has\ttab").check_text_fields().unwrap_err();
        assert!(matches!(err, TscError::InvalidCharacter { ref code, field: "Name" } if code == "<A"));

        let err = Command::new("<A", "").with_description("two\nlines").check_text_fields().unwrap_err();
        assert!(matches!(err, TscError::InvalidCharacter { field: "Description", .. }));

        let err = Command::new("<A\r", "").check_text_fields().unwrap_err();
        assert!(matches!(err, TscError::InvalidCharacter { field: "Code", .. }));
    }

    #[test]
    fn test_label() {
        assert_eq!(Command::new("<MSG", "Message").label(), "<MSG - Message");
    }
}
