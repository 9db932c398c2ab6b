use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use tsc_list::{load_file, save_file, Command, CommandList, LineEnding, Parameter, ParameterType, MAX_PARAMETERS, MAX_PARAMETER_LENGTH};

use crate::Options;

/// Parses `TYPE[:LEN]`, `TYPE` being either the type character or its name.
pub fn parse_parameter(arg: &str) -> Result<Parameter, String> {
    let (type_part, length) = match arg.rsplit_once(':') {
        Some((t, len)) if !t.is_empty() => {
            let length: u32 = len.parse().map_err(|_| format!("invalid parameter length '{len}'"))?;
            if length == 0 || length > MAX_PARAMETER_LENGTH {
                return Err(format!("parameter length {length} out of range (1 to {MAX_PARAMETER_LENGTH})"));
            }
            (t, length)
        }
        _ => (arg, 4),
    };

    let mut chars = type_part.chars();
    let parameter_type = match (chars.next(), chars.next()) {
        (Some(ch), None) => ParameterType::from_char(ch),
        _ => ParameterType::from_name(type_part),
    };
    match parameter_type {
        Some(ParameterType::None) => Err("parameter type None can't be used for a parameter".to_string()),
        Some(parameter_type) => Ok(Parameter::new(parameter_type, length)),
        None => Err(format!("unknown parameter type '{type_part}'")),
    }
}

pub fn write_list(path: &Path, list: &mut CommandList, options: &Options) -> anyhow::Result<()> {
    if options.sort_on_save {
        list.sort_by_code();
    }
    list.validate()?;
    save_file(path, list.as_slice(), options.line_ending).with_context(|| format!("Could not save TSC file {}", path.display()))?;
    Ok(())
}

fn read_list(path: &Path) -> anyhow::Result<CommandList> {
    load_file(path).with_context(|| format!("Could not load TSC file {}", path.display()))
}

pub fn check(path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let list = read_list(path)?;
    writeln!(out, "Successfully loaded {} commands from \"{}\"", list.len(), path.display())?;
    Ok(())
}

pub fn list(path: &Path, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let list = read_list(path)?;
    if json {
        serde_json::to_writer_pretty(&mut *out, &list)?;
        writeln!(out)?;
        return Ok(());
    }
    for cmd in &list {
        writeln!(out, "{}", describe(cmd))?;
    }
    Ok(())
}

fn describe(cmd: &Command) -> String {
    let params: Vec<String> = cmd.active_parameters().iter().map(|p| format!("{}:{}", p.parameter_type, p.length)).collect();
    let mut flags = Vec::new();
    if cmd.ends_event {
        flags.push("ends event");
    }
    if cmd.clears_textbox {
        flags.push("clears textbox");
    }
    if !cmd.params_are_separated {
        flags.push("joined parameters");
    }
    let mut line = format!("{}\t({})", cmd.label(), params.join(", "));
    if !flags.is_empty() {
        line.push_str(&format!(" [{}]", flags.join(", ")));
    }
    line
}

pub fn types(out: &mut impl Write) -> anyhow::Result<()> {
    for t in ParameterType::ALL {
        writeln!(out, "{}\t{}", t.to_char(), t.name())?;
    }
    Ok(())
}

pub fn convert(path: &Path, output: Option<&PathBuf>, options: &Options) -> anyhow::Result<()> {
    let mut list = read_list(path)?;
    write_list(output.map_or(path, |p| p.as_path()), &mut list, options)
}

pub fn new_list(path: &Path, options: &Options) -> anyhow::Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    write_list(path, &mut CommandList::new(), options)
}

pub struct NewCommand {
    pub code: String,
    pub name: String,
    pub description: String,
    pub parameters: Vec<Parameter>,
    pub ends_event: bool,
    pub clears_textbox: bool,
    pub joined_params: bool,
}

impl NewCommand {
    fn into_command(self) -> anyhow::Result<Command> {
        if self.code.is_empty() {
            bail!("command code must not be empty");
        }
        if self.parameters.len() > MAX_PARAMETERS {
            bail!("too many parameters ({} > {})", self.parameters.len(), MAX_PARAMETERS);
        }
        let mut cmd = Command::new(self.code, self.name).with_description(self.description);
        cmd.parameters[..self.parameters.len()].copy_from_slice(&self.parameters);
        cmd.ends_event = self.ends_event;
        cmd.clears_textbox = self.clears_textbox;
        cmd.params_are_separated = !self.joined_params;
        cmd.check_text_fields()?;
        Ok(cmd)
    }
}

pub fn add(path: &Path, new_command: NewCommand, options: &Options) -> anyhow::Result<()> {
    let mut list = read_list(path)?;
    let cmd = new_command.into_command()?;
    log::info!("Adding command {}", cmd.code);
    list.push(cmd)?;
    write_list(path, &mut list, options)
}

pub fn remove(path: &Path, code: &str, options: &Options) -> anyhow::Result<()> {
    let mut list = read_list(path)?;
    let Some(index) = list.find(code) else {
        bail!("No command with code {code} in {}", path.display());
    };
    list.remove(index);
    log::info!("Removed command {code}");
    write_list(path, &mut list, options)
}

pub fn config(options: &mut Options, sort_on_save: Option<bool>, line_ending: Option<LineEnding>, out: &mut impl Write) -> anyhow::Result<()> {
    let mut changed = false;
    if let Some(sort_on_save) = sort_on_save {
        options.sort_on_save = sort_on_save;
        changed = true;
    }
    if let Some(line_ending) = line_ending {
        options.line_ending = line_ending;
        changed = true;
    }
    if changed {
        options.store_options();
    }
    writeln!(out, "sort_on_save = {}", options.sort_on_save)?;
    writeln!(out, "line_ending = {:?}", options.line_ending)?;
    if let Some(dir) = Options::get_config_dir() {
        writeln!(out, "config dir: {}", dir.display())?;
    }
    Ok(())
}
