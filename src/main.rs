use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use exprcc::{cli::Args, Session};

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // stdout carries the program, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_max_level(args.log_level())
        .init();

    let config = args.config();
    let user_input = args.input.clone().contents().context("reading input")?;

    let stdout = io::stdout();
    let mut session =
        Session::new(&user_input, BufWriter::new(stdout.lock()), &config).dump_tree(args.dump_tree);
    let outcome = session.run().context("writing program")?;
    session.into_inner().flush().context("writing program")?;

    Ok(ExitCode::from(args.exit_status(&outcome)))
}
