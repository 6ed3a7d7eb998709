//! The line command language.
//!
//! One line is one user event: a sidebar click, an input change, a button press
//! or a filter selection.

use crate::error::CommandError;
use hcrm_core::{PatientFilter, RecordId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Follow a sidebar link (or any path).
    Go(String),
    /// Type `value` into the input named `field`.
    Set { field: String, value: String },
    /// Press the form's add/update button.
    Submit,
    Edit(RecordId),
    Delete(RecordId),
    Filter(PatientFilter),
    Show,
    Json,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  go <path>             open /, /patients, /medical-records, /prescriptions or /appointments
  set <field> <value>   type into a form input (empty value clears it)
  submit                press the add/update button (aliases: add, update, save)
  edit <id>             load a listed row into the form
  delete <id>           delete a listed row
  filter <all|id>       show all rows or only one patient's rows
  show                  redraw the current screen
  json                  print the current screen as JSON
  help                  print this help
  quit                  leave (alias: exit)";

impl Command {
    /// Parses one input line. Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim_start()),
            None => (trimmed, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "go" | "open" => {
                let path = required(rest, "go", "a path")?;
                Command::Go(path.to_owned())
            }
            "set" => {
                let rest = required(rest, "set", "a field name")?;
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim_start()),
                    None => (rest, ""),
                };
                Command::Set {
                    field: field.to_owned(),
                    value: value.to_owned(),
                }
            }
            "submit" | "add" | "update" | "save" => Command::Submit,
            "edit" => Command::Edit(record_id(rest, "edit")?),
            "delete" | "del" | "rm" => Command::Delete(record_id(rest, "delete")?),
            "filter" => {
                let value = required(rest, "filter", "'all' or a patient id")?;
                let filter = value
                    .parse::<PatientFilter>()
                    .map_err(|_| CommandError::InvalidFilter(value.to_owned()))?;
                Command::Filter(filter)
            }
            "show" | "ls" => Command::Show,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_owned())),
        };

        Ok(Some(command))
    }

    /// Whether the command changes what the screen shows.
    pub fn redraws(&self) -> bool {
        matches!(
            self,
            Command::Go(_)
                | Command::Set { .. }
                | Command::Submit
                | Command::Edit(_)
                | Command::Delete(_)
                | Command::Filter(_)
                | Command::Show
        )
    }
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(CommandError::MissingArgument { command, expected });
    }
    Ok(rest)
}

fn record_id(rest: &str, command: &'static str) -> Result<RecordId, CommandError> {
    let raw = required(rest, command, "a record id")?;
    raw.parse()
        .map_err(|_| CommandError::InvalidId(raw.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse("   \n"), Ok(None));
        assert_eq!(Command::parse("# schedule a checkup"), Ok(None));
    }

    #[test]
    fn test_set_keeps_rest_of_line_as_value() {
        assert_eq!(
            Command::parse("set reason Annual checkup, fasting\n"),
            Ok(Some(Command::Set {
                field: "reason".into(),
                value: "Annual checkup, fasting".into()
            }))
        );
        assert_eq!(
            Command::parse("set reason"),
            Ok(Some(Command::Set {
                field: "reason".into(),
                value: String::new()
            }))
        );
    }

    #[test]
    fn test_verbs_and_aliases() {
        assert_eq!(
            Command::parse("go /appointments"),
            Ok(Some(Command::Go("/appointments".into())))
        );
        assert_eq!(Command::parse("ADD"), Ok(Some(Command::Submit)));
        assert_eq!(Command::parse("update"), Ok(Some(Command::Submit)));
        assert_eq!(Command::parse("edit 2"), Ok(Some(Command::Edit(2))));
        assert_eq!(Command::parse("rm 1"), Ok(Some(Command::Delete(1))));
        assert_eq!(
            Command::parse("filter all"),
            Ok(Some(Command::Filter(PatientFilter::All)))
        );
        assert_eq!(
            Command::parse("filter 2"),
            Ok(Some(Command::Filter(PatientFilter::Patient(2))))
        );
        assert_eq!(Command::parse("exit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn test_argument_errors() {
        assert_eq!(
            Command::parse("go"),
            Err(CommandError::MissingArgument {
                command: "go",
                expected: "a path"
            })
        );
        assert_eq!(
            Command::parse("edit two"),
            Err(CommandError::InvalidId("two".into()))
        );
        assert_eq!(
            Command::parse("filter someone"),
            Err(CommandError::InvalidFilter("someone".into()))
        );
        assert_eq!(
            Command::parse("filter"),
            Err(CommandError::MissingArgument {
                command: "filter",
                expected: "'all' or a patient id"
            })
        );
        assert_eq!(
            Command::parse("discharge 1"),
            Err(CommandError::Unknown("discharge".into()))
        );
    }

    #[test]
    fn test_only_screen_commands_redraw() {
        assert!(Command::Submit.redraws());
        assert!(Command::Go("/".into()).redraws());
        assert!(!Command::Help.redraws());
        assert!(!Command::Json.redraws());
        assert!(!Command::Quit.redraws());
    }
}
