//! CLI argument definitions for the `oxie` command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined
//! here, keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// OXI E16 Scene Compiler
#[derive(Parser)]
#[command(name = "oxie")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Compile a scene definition into a .oxie16 scene file
    #[command(after_help = "\
Encoder formats:
  {abbr, name, cc}                    - basic CC
  {abbr, name, cc, channel}           - CC with channel override
  {abbr, name, cc, default}           - CC with reset value
  {abbr, name, cc, lower, upper}      - CC with range
  {abbr, name, msb, lsb}              - NRPN
  [abbr, name?, msb, lsb, channel?]   - compact NRPN

Notes:
  - Push encoder resets the parameter to its default value
  - Set \"instrument\" to an .oxiindef file to seed default values
  - Page \"type\" (\"cc\" or \"nrpn\") sets the default for its encoders")]
    Compile {
        /// Path to the scene definition JSON
        input: String,

        /// Output path (default: input path with the .oxie16 extension)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the generated scene JSON
        #[arg(long)]
        pretty: bool,
    },
}
