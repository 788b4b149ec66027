use super::settings::{Setting, Settings};
use anyhow::anyhow;
use rustyline::completion::{Completer, Pair};
use rustyline::Context;

const COMMANDS: &[(&str, &str, &str)] = &[
    (":help", ":help", "Show help on the available commands"),
    (":set", ":set (+|-)setting", "Enable or disable a setting"),
    (":settings", ":settings", "Show the values of all settings"),
];

pub struct Commands;

impl Commands {
    pub fn new() -> Self {
        Self {}
    }

    /// Run `input` if it is a REPL command.
    /// Returns `false` for anything that should be compiled instead.
    pub fn dispatch(&self, input: &str, settings: &mut Settings) -> anyhow::Result<bool> {
        let parts: Vec<&str> = input.trim().split_whitespace().collect();

        if let Some(true) = parts.first().map(|e| e.starts_with(':')) {
            match &parts[..] {
                [":help"] => self.handle_help()?,
                [":set", argument] => self.handle_set(argument, settings)?,
                [":settings"] => println!("Settings+> {}", self.describe_settings(settings)),
                _ => return Err(anyhow!("Invalid command. Type :help for help.")),
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn handle_help(&self) -> anyhow::Result<()> {
        println!("Available commands: ");
        for (_, usage, description) in COMMANDS {
            self.display_help(usage, description);
        }
        println!(
            "\nSettings: {}",
            Setting::all()
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(())
    }

    fn handle_set(&self, setting: &str, settings: &mut Settings) -> anyhow::Result<()> {
        if let Some(name) = setting.strip_prefix('+') {
            settings.enable(self.parse_setting(name)?);
            Ok(())
        } else if let Some(name) = setting.strip_prefix('-') {
            settings.disable(self.parse_setting(name)?);
            Ok(())
        } else {
            Err(anyhow!(
                "Setting must be a known setting and prefixed with either + or -"
            ))
        }
    }

    fn parse_setting(&self, input: &str) -> anyhow::Result<Setting> {
        Setting::parse(input).ok_or_else(|| anyhow!("Unknown setting {}", input))
    }

    pub fn describe_settings(&self, settings: &Settings) -> String {
        settings
            .as_vec()
            .iter()
            .map(|(s, f)| format!("{}: {}", s, if *f { "enabled" } else { "disabled" }))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[inline]
    fn display_help(&self, usage: &str, description: &str) {
        println!("{:<25} {}", usage, description);
    }
}

/// Completes command names at the start of the line.
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self {}
    }

    fn complete_command(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let input = &line[..pos];

        if !input.starts_with(':') || input.contains(char::is_whitespace) {
            return (pos, vec![]);
        }

        let matches = COMMANDS
            .iter()
            .filter(|(name, _, _)| name.starts_with(input))
            .map(|(name, _, _)| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();

        (0, matches)
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.complete_command(line, pos))
    }
}
