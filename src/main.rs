use anyhow::Result;
use clap::Parser;
use keycalc::cli::Args;
use keycalc::config::Config;
use keycalc::logging;
use keycalc::repl::Repl;
use std::io;

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref())?;
    args.apply_to(&mut config);
    logging::init(config.debug);
    tracing::debug!(?config, "starting session");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    Repl::new(config).run(stdin.lock(), &mut stdout, &mut stderr)
}
