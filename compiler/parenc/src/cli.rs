//! Command-line parsing for the `paren` binary.

use paren_diagnostic::ColorMode;

use crate::Options;

pub const USAGE: &str =
    "Usage: paren [--strict] [--max-stack=<n>] [--color=auto|always|never] (<file> | -e <source>)";

/// What to evaluate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    File(String),
    Inline(String),
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run { options: Options, input: Input },
    Help,
}

/// Parse the arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = Options::default();
    let mut input = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "--help" || arg == "-h" {
            return Ok(Command::Help);
        } else if arg == "--strict" {
            options.strict = true;
        } else if let Some(value) = arg.strip_prefix("--max-stack=") {
            options.max_stack_size = match value.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(format!("invalid stack size `{value}`")),
            };
        } else if let Some(value) = arg.strip_prefix("--color=") {
            options.color = ColorMode::from_flag(value)
                .ok_or_else(|| format!("invalid color mode `{value}`"))?;
        } else if arg == "-e" {
            let Some(source) = iter.next() else {
                return Err("`-e` requires a source argument".to_string());
            };
            set_input(&mut input, Input::Inline(source.clone()))?;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option `{arg}`"));
        } else {
            set_input(&mut input, Input::File(arg.clone()))?;
        }
    }

    match input {
        Some(input) => Ok(Command::Run { options, input }),
        None => Err("missing input".to_string()),
    }
}

fn set_input(slot: &mut Option<Input>, input: Input) -> Result<(), String> {
    if slot.is_some() {
        return Err("only one input may be given".to_string());
    }
    *slot = Some(input);
    Ok(())
}
