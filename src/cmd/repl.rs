use crate::repl::{Repl, Session};

pub fn options<'a>() -> clap::Command<'a> {
    clap::Command::new("repl")
        .alias("r")
        .about("Start the REPL")
}

pub fn execute() -> anyhow::Result<()> {
    let mut repl = Repl::new(Session::new())?;
    repl.run_loop()
}
