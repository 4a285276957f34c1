//! Build script for symscope-cli.
//!
//! Renders the `symscope.1` man page into OUT_DIR with clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here by hand.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs and
/// src/commands/.
fn build_cli() -> Command {
    Command::new("symscope")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve symlinks without leaving a scope directory")
        .long_about(
            "Resolve every symbolic link in a path as though the scope directory were \
             the filesystem root. The result is always the scope or a path beneath it.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file as well as the user file")
                .value_name("FILE")
                .global(true)
                .env("SYMSCOPE_CONFIG"),
        )
        .subcommands([
            Command::new("resolve")
                .about("Resolve a path inside a scope directory")
                .long_about(
                    "Follow symlinks in PATH, re-rooting absolute targets under the scope \
                     and clamping any escape at the scope root",
                )
                .arg(Arg::new("path").value_name("PATH").required(true))
                .arg(
                    Arg::new("scope")
                        .long("scope")
                        .value_name("DIR")
                        .help("Directory the result must stay inside (default: current directory)"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FORMAT")
                        .help("Output format: plain or json"),
                )
                .arg(
                    Arg::new("max-link-depth")
                        .long("max-link-depth")
                        .value_name("N")
                        .help("Maximum number of symlinks to follow"),
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("symscope.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
