use thiserror::Error;

pub type Result<T> = std::result::Result<T, TscError>;

pub mod command;
pub use command::*;

pub mod parameter;
pub use parameter::*;

pub mod header;
pub use header::{FormatVariant, ListHeader};

pub mod record;

pub mod list;
pub use list::*;

pub mod encoder;
pub use encoder::LineEnding;

mod codec;
pub use codec::*;

#[derive(Error, Debug)]
pub enum TscError {
    #[error("Could not find [CE_TSC]/[BL_TSC] header")]
    HeaderNotFound,

    #[error("Couldn't read command count (\"{0}\") in header")]
    MalformedCount(String),

    #[error("Incorrect command count; claims there are {declared} commands, but only has {found}")]
    TruncatedInput { declared: u32, found: u32 },

    #[error("Command {command} has missing parts: {}", .missing.join(", "))]
    InsufficientFields { command: String, missing: Vec<&'static str> },

    #[error("Command {code} has invalid number \"{value}\" in part {field} (expected 0 to {max})", max = MAX_PARAMETERS)]
    InvalidParameterCount { code: String, field: &'static str, value: String },

    #[error("Command {code} has unknown parameter type {} for parameter #{parameter}", display_type_char(.character))]
    UnknownParameterType { code: String, character: Option<char>, parameter: usize },

    #[error("Command {code} has unparsable number \"{value}\" in part {field}")]
    InvalidBooleanField { code: String, field: &'static str, value: String },

    #[error("Command {code} has bad length \"{value}\" in part {field} (expected 1 to {max})", max = MAX_PARAMETER_LENGTH)]
    InvalidParameterLength { code: String, field: &'static str, parameter: usize, value: String },

    #[error("Commands #{first} and #{second} have same code {code}")]
    DuplicateCode { first: usize, second: usize, code: String },

    #[error("Command {code} contains a tab or line break in part {field}")]
    InvalidCharacter { code: String, field: &'static str },

    #[error("Code {0} is already in use.")]
    CodeInUse(String),

    #[error("Command index {index} out of range (list has {len} commands)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_type_char(ch: &Option<char>) -> String {
    match ch {
        Some(ch) => format!("'{ch}'"),
        None => "(missing)".to_string(),
    }
}

/// Reads an unsigned number the way the list files have always been read:
/// surrounding whitespace is ignored and leading zeros are fine.
pub(crate) fn parse_unsigned(field: &str) -> Option<u32> {
    let trimmed = field.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use crate::{parse_unsigned, TscError};

    #[test]
    fn test_parse_unsigned() {
        assert_eq!(parse_unsigned("4"), Some(4));
        assert_eq!(parse_unsigned(" 12 "), Some(12));
        assert_eq!(parse_unsigned("007"), Some(7));
        assert_eq!(parse_unsigned(""), None);
        assert_eq!(parse_unsigned("-1"), None);
        assert_eq!(parse_unsigned("+1"), None);
        assert_eq!(parse_unsigned("x"), None);
        assert_eq!(parse_unsigned("4294967296"), None);
    }

    #[test]
    fn test_error_messages() {
        let err = TscError::InsufficientFields {
            command: "<MSG".to_string(),
            missing: vec!["Name", "Description"],
        };
        assert_eq!(err.to_string(), "Command <MSG has missing parts: Name, Description");

        let err = TscError::UnknownParameterType {
            code: "<FAI".to_string(),
            character: Some('z'),
            parameter: 2,
        };
        assert_eq!(err.to_string(), "Command <FAI has unknown parameter type 'z' for parameter #2");

        let err = TscError::UnknownParameterType {
            code: "<FAI".to_string(),
            character: None,
            parameter: 1,
        };
        assert_eq!(err.to_string(), "Command <FAI has unknown parameter type (missing) for parameter #1");

        let err = TscError::DuplicateCode {
            first: 1,
            second: 3,
            code: "<END".to_string(),
        };
        assert_eq!(err.to_string(), "Commands #1 and #3 have same code <END");
    }
}
