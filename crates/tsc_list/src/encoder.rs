use std::fmt::Write as _;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{header::EXTENDED_TAG, Command, ParameterType, MAX_PARAMETERS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineEnding {
    /// `\r\n` on Windows, `\n` everywhere else.
    #[default]
    Native,
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Serializes the commands in extended (`[BL_TSC]`) form, keeping their order.
///
/// Doesn't validate anything - duplicate codes are written as they are.
pub fn encode(commands: &[Command], line_ending: LineEnding) -> String {
    let eol = line_ending.as_str();
    let mut out = String::new();
    // writing to a String can't fail
    let _ = write!(out, "{}\t{}{}", EXTENDED_TAG, commands.len(), eol);
    for cmd in commands {
        encode_command(&mut out, cmd);
        out.push_str(eol);
    }
    out
}

fn encode_command(out: &mut String, cmd: &Command) {
    let param_count = cmd.param_count();
    let mut param_types = String::with_capacity(MAX_PARAMETERS);
    for (i, p) in cmd.parameters.iter().enumerate() {
        if i < param_count {
            param_types.push(p.parameter_type.to_char());
        } else {
            param_types.push(ParameterType::None.to_char());
        }
    }

    let _ = write!(
        out,
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        cmd.code,
        param_count,
        param_types,
        cmd.name,
        cmd.description,
        u8::from(cmd.ends_event),
        u8::from(cmd.clears_textbox),
        u8::from(cmd.params_are_separated)
    );
    for p in &cmd.parameters {
        let _ = write!(out, "\t{}", p.length);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Parameter;

    #[test]
    fn test_empty_list() {
        assert_eq!(encode(&[], LineEnding::Lf), "[BL_TSC]\t0\n");
    }

    #[test]
    fn test_encode_command() {
        let mut cmd = Command::new("<FLJ", "Jump on flag").with_description("Jumps if flag is set");
        cmd.parameters[0] = Parameter::new(ParameterType::Flag, 4);
        cmd.parameters[1] = Parameter::new(ParameterType::Event, 2);
        cmd.ends_event = true;

        assert_eq!(
            encode(&[cmd], LineEnding::CrLf),
            "[BL_TSC]\t1\r\n<FLJ\t2\tFe--\tJump on flag\tJumps if flag is set\t1\t0\t1\t4\t2\t4\t4\r\n"
        );
    }

    #[test]
    fn test_slots_after_gap_are_written_as_none() {
        let mut cmd = Command::new("<GAP", "Gap");
        cmd.parameters[0] = Parameter::new(ParameterType::Item, 1);
        cmd.parameters[2] = Parameter::new(ParameterType::Map, 3);

        let text = encode(&[cmd], LineEnding::Lf);
        assert_eq!(text.lines().nth(1), Some("<GAP\t1\ti---\tGap\t\t0\t0\t1\t1\t4\t3\t4"));
    }

    #[test]
    fn test_keeps_order() {
        let cmds = vec![Command::new("<Z", "z"), Command::new("<A", "a")];
        let text = encode(&cmds, LineEnding::Lf);
        let codes: Vec<&str> = text.lines().skip(1).map(|l| l.split('\t').next().unwrap()).collect();
        assert_eq!(codes, vec!["<Z", "<A"]);
    }

    #[test]
    fn test_native_line_ending() {
        let text = encode(&[], LineEnding::Native);
        if cfg!(windows) {
            assert!(text.ends_with("\r\n"));
        } else {
            assert_eq!(text, "[BL_TSC]\t0\n");
        }
    }
}
