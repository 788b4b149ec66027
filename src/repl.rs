pub mod command;
pub mod settings;

use crate::compiler;
use crate::compiler::Compiler;
use crate::parens_config_directory;
use crate::repl::command::{CommandCompleter, Commands};
use crate::repl::settings::{Setting, Settings};
use crate::PARENS_VERSION;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::ValidationContext;
use rustyline::validate::ValidationResult;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};
use std::borrow::Cow;

pub struct Repl {
    session: Session,
    commands: Commands,
    editor: Editor<ReplHelper>,
}

/// Compiler plus the settings that decide what gets echoed for each input.
pub struct Session {
    pub compiler: Compiler,
    pub settings: Settings,
}

impl Session {
    pub fn new() -> Self {
        Self {
            compiler: Compiler::new(),
            settings: Settings::default(),
        }
    }

    /// Compile `input`, prefixed by every intermediate stage that is enabled.
    pub fn eval(&self, input: &str) -> compiler::Result<String> {
        let mut out = vec![];

        if self.settings.is_enabled(&Setting::Tokens) {
            let tokens = self.compiler.tokens(input)?;
            out.push(format!("tokens+> {:?}", tokens));
        }

        if self.settings.is_enabled(&Setting::Ast) {
            out.push(format!("ast+> {:#?}", self.compiler.source_ast(input)?));
        }

        if self.settings.is_enabled(&Setting::Target) {
            out.push(format!("target+> {:#?}", self.compiler.target_ast(input)?));
        }

        out.push(self.compiler.compile_str(input)?);
        Ok(out.join("\n"))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ReplHelper {
    command_completer: CommandCompleter,
    bracket_validator: rustyline::validate::MatchingBracketValidator,
    bracket_highlighter: rustyline::highlight::MatchingBracketHighlighter,
}

impl ReplHelper {
    pub fn new() -> Self {
        Self {
            command_completer: CommandCompleter::new(),
            bracket_validator: rustyline::validate::MatchingBracketValidator::new(),
            bracket_highlighter: rustyline::highlight::MatchingBracketHighlighter::new(),
        }
    }
}

impl Helper for ReplHelper {}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &rustyline::Context) -> Option<Self::Hint> {
        None
    }
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &rustyline::Context,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        self.command_completer.complete(line, pos, ctx)
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.bracket_highlighter.highlight(line, pos)
    }

    fn highlight_char(&self, line: &str, pos: usize) -> bool {
        self.bracket_highlighter.highlight_char(line, pos)
    }
}

impl Validator for ReplHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        self.bracket_validator.validate(ctx)
    }
}

impl Repl {
    pub fn new(session: Session) -> anyhow::Result<Self> {
        Self::create_directories()?;

        let mut editor = Editor::<ReplHelper>::with_config(Self::default_config());
        editor.set_helper(Some(ReplHelper::new()));
        let commands = Commands::new();

        Ok(Self {
            session,
            editor,
            commands,
        })
    }

    // main read-compile-print loop
    pub fn run_loop(&mut self) -> anyhow::Result<()> {
        if let Err(e) = self.editor.load_history(&Self::history_path()) {
            log::debug!("could not load history: {}", e);
        }
        self.banner();

        loop {
            let prompt = self.prompt();

            match self.editor.readline(&prompt) {
                Ok(input) => {
                    if let Err(e) = self.handle_input(&input) {
                        eprintln!("{}", e);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        self.editor.save_history(&Self::history_path())?;
        Ok(())
    }

    fn banner(&self) {
        println!("PARENS - lisp calls in, c calls out");
        println!("Version: {}\n", PARENS_VERSION);
        println!("Type :help for help.");
    }

    fn handle_input(&mut self, input: &str) -> anyhow::Result<()> {
        if input.trim().is_empty() {
            return Ok(());
        }

        if !self.commands.dispatch(input, &mut self.session.settings)? {
            match self.session.eval(input) {
                Ok(output) => println!("{}", output),
                Err(e) => eprintln!("{}", e),
            }
        }
        Ok(())
    }

    #[inline]
    fn prompt(&self) -> String {
        String::from("λ ")
    }

    fn default_config() -> rustyline::config::Config {
        let config_builder = rustyline::config::Config::builder();

        config_builder
            .auto_add_history(true)
            .history_ignore_dups(true)
            .history_ignore_space(false)
            .max_history_size(500)
            .completion_prompt_limit(100)
            .build()
    }

    fn history_path() -> std::path::PathBuf {
        Self::config_dir().join("history")
    }

    #[inline]
    fn create_directories() -> anyhow::Result<()> {
        std::fs::create_dir_all(Self::config_dir())?;

        if !Self::history_path().exists() {
            std::fs::File::create(Self::history_path())?;
        }

        Ok(())
    }

    #[inline]
    fn config_dir() -> std::path::PathBuf {
        parens_config_directory().join("repl")
    }
}
