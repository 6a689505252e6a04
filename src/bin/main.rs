use anyhow::{Context, Result};
use clap::Parser;
use genversion::define::{self, MacroName};
use genversion::utils::git::{self, GitError};
use log::debug;
use std::io::{self, Write};
use std::process;

/// Print the repository's `git describe` output as a compiler macro definition
#[derive(Parser)]
#[command(author, version = env!("GIT_VERSION"), about, long_about = None)]
struct Cli {
    /// Macro the descriptor is bound to
    #[arg(
        long = "macro",
        value_enum,
        default_value_t = MacroName::GitVersion,
        env = "GENVERSION_MACRO"
    )]
    macro_name: MacroName,
}

fn run(cli: &Cli) -> Result<()> {
    let descriptor = git::describe().context("can not describe the current repository")?;
    let flag = define::format_define(cli.macro_name, &descriptor);
    debug!("emitting {}", String::from_utf8_lossy(&flag));

    let mut stdout = io::stdout().lock();
    stdout.write_all(&flag)?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        debug!("{:?}", e);
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<GitError>()
            .map(GitError::exit_code)
            .unwrap_or(1);
        process::exit(code);
    }
}
