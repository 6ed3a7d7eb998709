//! Drives a [`Shell`] from a stream of command lines.

use crate::command::{Command, HELP};
use crate::error::{ConsoleError, ConsoleResult};
use crate::render::{render, render_json, OutputFormat};
use hcrm_core::{Shell, Submission};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// When a session draws the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderPolicy {
    /// Redraw after every command that changes the screen.
    #[default]
    EveryCommand,
    /// Draw once, when input ends.
    FinalOnly,
}

#[derive(Clone, Debug, Default)]
pub struct SessionOptions {
    pub format: OutputFormat,
    pub prompt: bool,
    pub render: RenderPolicy,
}

impl SessionOptions {
    /// Options for a person at a terminal.
    pub fn interactive() -> Self {
        Self {
            format: OutputFormat::Text,
            prompt: true,
            render: RenderPolicy::EveryCommand,
        }
    }

    /// Options for replaying a script: no prompt, one final view.
    pub fn replay(format: OutputFormat) -> Self {
        Self {
            format,
            prompt: false,
            render: RenderPolicy::FinalOnly,
        }
    }
}

/// Counts reported when a session ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub errors: usize,
}

pub struct Session<R, W> {
    shell: Shell,
    input: R,
    output: W,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(shell: Shell, input: R, output: W, options: SessionOptions) -> Self {
        Self {
            shell,
            input,
            output,
            options,
        }
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn into_parts(self) -> (Shell, W) {
        (self.shell, self.output)
    }

    /// Reads commands until input ends or `quit`.
    ///
    /// Bad commands and rejected actions are reported on the output and the
    /// session carries on. I/O failures end it.
    pub fn run(&mut self) -> ConsoleResult<SessionSummary> {
        let mut summary = SessionSummary::default();
        if self.options.render == RenderPolicy::EveryCommand {
            self.draw()?;
        }

        let mut line = String::new();
        loop {
            if self.options.prompt {
                self.write(&format!("{}> ", self.shell.path()))?;
                self.output.flush().map_err(ConsoleError::Write)?;
            }

            line.clear();
            let read = self.input.read_line(&mut line).map_err(ConsoleError::Read)?;
            if read == 0 {
                break;
            }

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    summary.errors += 1;
                    self.report(err.into())?;
                    continue;
                }
            };
            summary.commands += 1;

            if command == Command::Quit {
                break;
            }
            let redraws = command.redraws();
            match self.apply(command) {
                Ok(()) => {
                    if redraws && self.options.render == RenderPolicy::EveryCommand {
                        self.draw()?;
                    }
                }
                Err(err) if err.is_recoverable() => {
                    summary.errors += 1;
                    self.report(err)?;
                }
                Err(err) => return Err(err),
            }
        }

        if self.options.render == RenderPolicy::FinalOnly {
            self.draw()?;
        }
        tracing::info!(
            commands = summary.commands,
            errors = summary.errors,
            "session ended"
        );
        Ok(summary)
    }

    fn apply(&mut self, command: Command) -> ConsoleResult<()> {
        tracing::debug!(?command, "applying command");
        match command {
            Command::Go(path) => {
                self.shell.navigate(&path);
            }
            Command::Set { field, value } => self.shell.set_field(&field, &value)?,
            Command::Submit => match self.shell.submit()? {
                Submission::Ignored => {
                    tracing::debug!("submit ignored: nothing was created or updated");
                }
                Submission::Created(id) => tracing::debug!(id, "created"),
                Submission::Updated(id) => tracing::debug!(id, "updated"),
            },
            Command::Edit(id) => self.shell.edit(id)?,
            Command::Delete(id) => self.shell.delete(id)?,
            Command::Filter(filter) => self.shell.set_filter(filter)?,
            Command::Show => {}
            Command::Json => {
                let json = render_json(&self.shell.view())?;
                self.write(&json)?;
            }
            Command::Help => {
                self.write(HELP)?;
                self.write("\n")?;
            }
            Command::Quit => {}
        }
        Ok(())
    }

    fn draw(&mut self) -> ConsoleResult<()> {
        let out = render(&self.shell.view(), self.options.format)?;
        self.write(&out)
    }

    fn report(&mut self, err: ConsoleError) -> ConsoleResult<()> {
        tracing::warn!("{err}");
        self.write(&format!("error: {err}\n"))
    }

    fn write(&mut self, text: &str) -> ConsoleResult<()> {
        self.output
            .write_all(text.as_bytes())
            .map_err(ConsoleError::Write)
    }
}

/// Replays the commands in `script` against `shell`, writing to `output`.
pub fn replay_file<W: Write>(
    shell: Shell,
    script: &Path,
    output: W,
    format: OutputFormat,
) -> ConsoleResult<(Shell, SessionSummary)> {
    let file = File::open(script).map_err(|source| ConsoleError::ScriptOpen {
        path: script.to_path_buf(),
        source,
    })?;
    tracing::info!("replaying {}", script.display());

    let mut session = Session::new(
        shell,
        BufReader::new(file),
        output,
        SessionOptions::replay(format),
    );
    let summary = session.run()?;
    let (shell, _) = session.into_parts();
    Ok((shell, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hcrm_core::{ActiveScreen, CoreConfig, Entry};
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    fn shell_at(path: &str) -> Shell {
        let cfg = CoreConfig::from_env_values(None, None, Some(path.into()))
            .expect("test config should be valid");
        Shell::new(cfg)
    }

    fn run_script(shell: Shell, script: &str, options: SessionOptions) -> (Shell, String, SessionSummary) {
        let mut session = Session::new(shell, Cursor::new(script.as_bytes()), Vec::new(), options);
        let summary = session.run().expect("session should run");
        let (shell, out) = session.into_parts();
        (shell, String::from_utf8(out).expect("output should be utf-8"), summary)
    }

    #[test]
    fn test_schedules_an_appointment() {
        let script = "\
go /appointments
set patientId 2
set date 2023-07-01
set time 09:00
set reason Follow-up
submit
";
        let (shell, out, summary) =
            run_script(shell_at("/"), script, SessionOptions::replay(OutputFormat::Text));

        assert_eq!(summary, SessionSummary { commands: 6, errors: 0 });
        let ActiveScreen::Appointments(screen) = shell.active() else {
            panic!("expected the appointments screen");
        };
        let ids: Vec<u32> = screen.ledger().iter().map(Entry::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(out.contains("Follow-up"));
        assert!(out.contains("edit 3 | delete 3"));
    }

    #[test]
    fn test_errors_are_reported_and_session_continues() {
        let script = "\
frobnicate
go /patients
set weight 80
edit 9
filter 1
set name Grace Hopper
set age 85
set gender Female
add
";
        let (shell, out, summary) =
            run_script(shell_at("/"), script, SessionOptions::replay(OutputFormat::Text));

        assert_eq!(summary.errors, 4);
        assert!(out.contains("error: unknown command: frobnicate"));
        assert!(out.contains("error: unknown patient field: weight"));
        assert!(out.contains("error: no patient with id 9 is listed"));
        assert!(out.contains("error: the /patients view has no patient filter"));
        assert_eq!(shell.patients().name_of(3), "Grace Hopper");
    }

    #[test]
    fn test_quit_stops_reading() {
        let (shell, _, summary) = run_script(
            shell_at("/"),
            "go /patients\nquit\ngo /appointments\n",
            SessionOptions::replay(OutputFormat::Text),
        );
        assert_eq!(summary.commands, 2);
        assert_eq!(shell.path(), "/patients");
    }

    #[test]
    fn test_interactive_prompts_and_redraws() {
        let (_, out, _) = run_script(
            shell_at("/"),
            "help\ngo /prescriptions\n",
            SessionOptions::interactive(),
        );
        assert!(out.starts_with("== Hospital CRM =="));
        assert!(out.contains("/> "));
        assert!(out.contains("commands:"));
        assert!(out.contains("/prescriptions> "));
        assert_eq!(out.matches("== Hospital CRM ==").count(), 2);
    }

    #[test]
    fn test_json_command_prints_view() {
        let (_, out, _) = run_script(
            shell_at("/medical-records"),
            "filter 2\njson\n",
            SessionOptions {
                format: OutputFormat::Text,
                prompt: false,
                render: RenderPolicy::FinalOnly,
            },
        );
        let start = out.find('{').expect("json should be printed");
        let end = out.rfind('}').expect("json should be closed");
        let value: serde_json::Value =
            serde_json::from_str(&out[start..=end]).expect("printed view should parse");
        assert_eq!(value["screen"]["filter"]["selected"]["patientId"], 2);
        assert_eq!(value["screen"]["table"]["rows"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_replay_file() {
        let mut script = NamedTempFile::new().expect("temp file should be created");
        writeln!(script, "# remove the first prescription").expect("script should be written");
        writeln!(script, "go /prescriptions").expect("script should be written");
        writeln!(script, "delete 1").expect("script should be written");

        let mut out = Vec::new();
        let (shell, summary) = replay_file(shell_at("/"), script.path(), &mut out, OutputFormat::Json)
            .expect("replay should succeed");
        assert_eq!(summary.commands, 2);
        assert_eq!(shell.path(), "/prescriptions");

        let value: serde_json::Value = serde_json::from_slice(&out).expect("output should be JSON");
        assert_eq!(value["screen"]["table"]["rows"][0]["id"], 2);
    }

    #[test]
    fn test_replay_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let missing = dir.path().join("missing.hcrm");
        let err = replay_file(shell_at("/"), &missing, Vec::new(), OutputFormat::Text)
            .expect_err("missing script should fail");
        assert!(matches!(err, ConsoleError::ScriptOpen { .. }));
        assert!(!err.is_recoverable());
    }
}
