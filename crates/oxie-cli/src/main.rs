//! `oxie` - compile simplified scene definitions into OXI E16 scene files.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use oxie_scene::{compile_scene, InstrumentIndex};

mod cli_args;
mod input;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compile {
            input,
            output,
            pretty,
        } => compile(Path::new(&input), output.as_deref(), pretty),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn compile(input: &Path, output: Option<&str>, pretty: bool) -> Result<()> {
    let def = input::load_scene_def(input)?;

    let base = input.parent().unwrap_or_else(|| Path::new("."));
    let index = match def.instrument.as_deref() {
        Some(reference) => match input::resolve_instrument_path(reference, base) {
            Some(path) => {
                let instrument = input::load_instrument_def(&path)?;
                println!(
                    "Loaded instrument: {} ({} parameters)",
                    instrument.name.as_deref().unwrap_or("unnamed"),
                    instrument.parameters.len()
                );
                Some(InstrumentIndex::from_def(&instrument))
            }
            // An unresolved reference surfaces as a compile warning below.
            None => None,
        },
        None => None,
    };

    let compiled = compile_scene(&def, index.as_ref())?;
    for warning in &compiled.warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }

    let out_path = match output {
        Some(path) => PathBuf::from(path),
        None => input.with_extension("oxie16"),
    };
    let json = if pretty {
        serde_json::to_string_pretty(&compiled.scene)?
    } else {
        serde_json::to_string(&compiled.scene)?
    };
    std::fs::write(&out_path, json)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    println!("{} {}", "Generated:".green(), out_path.display());
    Ok(())
}
