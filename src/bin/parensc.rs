use parens::cmd;
use parens::PARENS_VERSION;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let matches = clap::Command::new("parensc")
        .version(PARENS_VERSION)
        .about("Compile lisp-like call expressions into c-like call statements")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(cmd::compile::Command::options())
        .subcommand(cmd::repl::options())
        .get_matches();

    match matches.subcommand() {
        Some(("compile", opts)) => cmd::compile::Command::new(opts)?.run(),
        Some(("repl", _)) => cmd::repl::execute(),
        _ => unreachable!("a subcommand is required"),
    }
}
