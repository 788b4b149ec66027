use crate::compiler;
use crate::compiler::source::{FileSource, StdinSource};
use crate::compiler::Compiler;
use anyhow::anyhow;
use clap::arg;
use std::io::{self, Write};
use std::path::PathBuf;

/// The pipeline stage `compile` prints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Emit {
    Tokens,
    Ast,
    Target,
    Code,
}

impl std::str::FromStr for Emit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "tokens" => Ok(Emit::Tokens),
            "ast" => Ok(Emit::Ast),
            "target" => Ok(Emit::Target),
            "code" => Ok(Emit::Code),
            other => Err(anyhow!("Unknown stage {}", other)),
        }
    }
}

pub struct Command {
    input: Option<PathBuf>,
    emit: Emit,
}

impl Command {
    pub fn new(opts: &clap::ArgMatches) -> anyhow::Result<Self> {
        let input = match opts.value_of("INPUT") {
            None | Some("-") => None,
            Some(path) => Some(PathBuf::from(path)),
        };
        let emit = opts.value_of("emit").unwrap_or("code").parse()?;

        Ok(Self { input, emit })
    }

    pub fn options<'a>() -> clap::Command<'a> {
        clap::Command::new("compile")
            .alias("c")
            .about("compile the specified file, or stdin, to c-like call statements")
            .arg(arg!([INPUT] "the file to compile, `-` reads from stdin"))
            .arg(
                arg!(--emit <STAGE> "the stage to print")
                    .required(false)
                    .possible_values(["tokens", "ast", "target", "code"])
                    .default_value("code"),
            )
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let compiler = Compiler::new();
        let source = match &self.input {
            Some(path) => compiler.read(&mut FileSource::new(path.clone()))?,
            None => compiler.read(&mut StdinSource)?,
        };

        let output = self.render(&compiler, &source)?;
        let mut stdout = io::stdout();
        stdout.write_all(output.as_bytes())?;
        stdout.write_all(b"\n")?;

        Ok(())
    }

    fn render(&self, compiler: &Compiler, source: &str) -> compiler::Result<String> {
        log::debug!("emitting {:?}", self.emit);

        match self.emit {
            Emit::Tokens => Ok(compiler
                .tokens(source)?
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            Emit::Ast => Ok(format!("{:#?}", compiler.source_ast(source)?)),
            Emit::Target => Ok(format!("{:#?}", compiler.target_ast(source)?)),
            Emit::Code => compiler.compile_str(source),
        }
    }
}
