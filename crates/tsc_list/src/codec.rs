use std::{fs, path::Path};

use crate::{
    encoder::{encode, LineEnding},
    header::ListHeader,
    list::{validate_unique_codes, CommandList},
    record::parse_record,
    Command, Result, TscError,
};

/// Parses a complete command list.
///
/// The result is only handed out if the header, every declared record and the
/// code uniqueness check succeed. The first error encountered wins.
pub fn load(text: &str) -> Result<CommandList> {
    let mut lines = text.lines();
    let header = ListHeader::read(&mut lines)?;

    // the count is untrusted until the records are actually there
    let mut commands = Vec::with_capacity((header.count as usize).min(256));
    for i in 0..header.count {
        let Some(line) = lines.next() else {
            return Err(TscError::TruncatedInput {
                declared: header.count,
                found: i,
            });
        };
        commands.push(parse_record(line, header.variant, i as usize)?);
    }
    validate_unique_codes(&commands)?;

    log::debug!("loaded {} commands ({:?})", commands.len(), header.variant);
    Ok(CommandList::from_commands(commands))
}

/// Serializes the commands in extended form with native line endings.
pub fn save(commands: &[Command]) -> String {
    encode(commands, LineEnding::Native)
}

pub fn save_with(commands: &[Command], line_ending: LineEnding) -> String {
    encode(commands, line_ending)
}

pub fn load_file(path: &Path) -> Result<CommandList> {
    let data = fs::read(path)?;
    let list = load(&String::from_utf8_lossy(&data))?;
    log::info!("Successfully loaded {} commands from {}", list.len(), path.display());
    Ok(list)
}

pub fn save_file(path: &Path, commands: &[Command], line_ending: LineEnding) -> Result<()> {
    fs::write(path, encode(commands, line_ending))?;
    log::info!("Successfully saved {} commands to {}", commands.len(), path.display());
    Ok(())
}
