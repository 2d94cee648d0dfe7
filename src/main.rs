use std::fs;
use std::io::{stdin, stdout};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use hou::evaluator::Evaluator;
use hou::repl;

/// The Hou programming language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to run; starts the REPL when omitted.
    script: Option<PathBuf>,

    /// Evaluate a snippet, print its value and exit.
    #[arg(short, long, value_name = "SNIPPET")]
    eval: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(snippet) = &args.eval {
        let mut evaluator = Evaluator::new();
        repl::run_source(snippet, &mut evaluator, stdout(), true)?;
        return Ok(());
    }

    if let Some(path) = &args.script {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut evaluator = Evaluator::new();
        repl::run_source(&source, &mut evaluator, stdout(), false)?;
        return Ok(());
    }

    let user = std::env::var("USER").unwrap_or_else(|_| "there".to_string());
    println!("Hello {}! This is the Hou programming language!", user);
    println!("Feel free to type in commands");
    repl::start(stdin(), stdout())?;
    Ok(())
}
