//! Decoding of a single tab separated command line.

use crate::{parse_unsigned, Command, FormatVariant, ParameterType, Result, TscError, MAX_PARAMETERS, MAX_PARAMETER_LENGTH};

/// Field names in on-disk order, used for error reporting.
pub const FIELD_NAMES: [&str; EXTENDED_FIELDS] = [
    "Code",
    "Parameter count",
    "Parameter types",
    "Name",
    "Description",
    "'Ends event' flag",
    "'Clears textbox' flag",
    "'Parameters are separated' flag",
    "Parameter 1 length",
    "Parameter 2 length",
    "Parameter 3 length",
    "Parameter 4 length",
];

pub const BASIC_FIELDS: usize = 5;
pub const EXTENDED_FIELDS: usize = 12;

const CODE: usize = 0;
const PARAM_COUNT: usize = 1;
const PARAM_TYPES: usize = 2;
const NAME: usize = 3;
const DESCRIPTION: usize = 4;
const ENDS_EVENT: usize = 5;
const CLEARS_TEXTBOX: usize = 6;
const PARAMS_ARE_SEPARATED: usize = 7;
const FIRST_LENGTH: usize = 8;

impl FormatVariant {
    pub fn field_count(self) -> usize {
        match self {
            FormatVariant::Basic => BASIC_FIELDS,
            FormatVariant::Extended => EXTENDED_FIELDS,
        }
    }
}

/// Parses one record line. `index` is the 0-based position of the record in the list.
pub fn parse_record(line: &str, variant: FormatVariant, index: usize) -> Result<Command> {
    let fields: Vec<&str> = line.split('\t').collect();
    let required = variant.field_count();
    if fields.len() < required {
        // split always yields at least one field, an empty one identifies nothing
        let command = match fields.first() {
            Some(code) if !code.is_empty() => code.to_string(),
            _ => format!("#{}", index + 1),
        };
        return Err(TscError::InsufficientFields {
            command,
            missing: FIELD_NAMES[fields.len()..required].to_vec(),
        });
    }

    let mut cmd = Command {
        code: fields[CODE].to_string(),
        ..Default::default()
    };

    let param_count = match parse_unsigned(fields[PARAM_COUNT]) {
        Some(count) if count as usize <= MAX_PARAMETERS => count as usize,
        _ => {
            return Err(TscError::InvalidParameterCount {
                code: cmd.code,
                field: FIELD_NAMES[PARAM_COUNT],
                value: fields[PARAM_COUNT].to_string(),
            });
        }
    };

    let mut type_chars = fields[PARAM_TYPES].chars();
    for (j, slot) in cmd.parameters.iter_mut().take(param_count).enumerate() {
        let ch = type_chars.next();
        let Some(parameter_type) = ch.and_then(ParameterType::from_char) else {
            return Err(TscError::UnknownParameterType {
                code: cmd.code,
                character: ch,
                parameter: j + 1,
            });
        };
        slot.parameter_type = parameter_type;
    }

    cmd.name = fields[NAME].to_string();
    cmd.description = fields[DESCRIPTION].to_string();

    if variant == FormatVariant::Basic {
        log::trace!("command #{} {} (basic)", index + 1, cmd.code);
        return Ok(cmd);
    }

    cmd.ends_event = parse_flag(&cmd.code, &fields, ENDS_EVENT)?;
    cmd.clears_textbox = parse_flag(&cmd.code, &fields, CLEARS_TEXTBOX)?;
    cmd.params_are_separated = parse_flag(&cmd.code, &fields, PARAMS_ARE_SEPARATED)?;

    for j in 0..param_count {
        let field = FIRST_LENGTH + j;
        match parse_unsigned(fields[field]) {
            Some(length) if (1..=MAX_PARAMETER_LENGTH).contains(&length) => cmd.parameters[j].length = length,
            _ => {
                return Err(TscError::InvalidParameterLength {
                    code: cmd.code,
                    field: FIELD_NAMES[field],
                    parameter: j + 1,
                    value: fields[field].to_string(),
                });
            }
        }
    }

    log::trace!("command #{} {} (extended)", index + 1, cmd.code);
    Ok(cmd)
}

fn parse_flag(code: &str, fields: &[&str], field: usize) -> Result<bool> {
    match parse_unsigned(fields[field]) {
        Some(value) => Ok(value > 0),
        None => Err(TscError::InvalidBooleanField {
            code: code.to_string(),
            field: FIELD_NAMES[field],
            value: fields[field].to_string(),
        }),
    }
}
