//! Build script for tablebook-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR for inclusion in release builds.
//!
//! The command structure is declared here by hand because a build script
//! cannot depend on the crate being built.

use clap::builder::BoolishValueParser;
use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn format_arg(values: &'static [&'static str]) -> Arg {
    Arg::new("format")
        .long("format")
        .help("Output format")
        .value_parser(values.to_vec())
}

fn dry_run_arg() -> Arg {
    Arg::new("dry-run")
        .long("dry-run")
        .help("Show the plan without writing")
        .action(ArgAction::SetTrue)
}

fn id_arg() -> Arg {
    Arg::new("id").value_name("ID").required(true)
}

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs and src/commands/.
fn build_cli() -> Command {
    Command::new("tablebook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage restaurant tables and reservations")
        .long_about(
            "Command-line tool for booking restaurant tables without overlapping reservations",
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
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("TABLEBOOK_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("TABLEBOOK_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(ArgAction::SetTrue)
                .value_parser(BoolishValueParser::new())
                .env("TABLEBOOK_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Initialize tablebook data directory and database")
                .arg(
                    Arg::new("overwrite")
                        .long("overwrite")
                        .help("Overwrite existing database")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("with-config")
                        .long("with-config")
                        .help("Create default configuration file")
                        .action(ArgAction::SetTrue),
                )
                .arg(dry_run_arg()),
            Command::new("table")
                .about("Create, inspect and delete tables")
                .subcommands(vec![
                    Command::new("create")
                        .about("Create a table")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("seats").long("seats").required(true))
                        .arg(Arg::new("location").long("location").required(true))
                        .arg(format_arg(&["id", "json"]))
                        .arg(dry_run_arg()),
                    Command::new("list")
                        .about("List tables")
                        .arg(Arg::new("location").long("location"))
                        .arg(Arg::new("name").long("name"))
                        .arg(
                            Arg::new("has-reservations")
                                .long("has-reservations")
                                .action(ArgAction::SetTrue),
                        )
                        .arg(format_arg(&["table", "json", "csv", "tsv"])),
                    Command::new("show")
                        .about("Show one table")
                        .arg(id_arg())
                        .arg(format_arg(&["table", "json"])),
                    Command::new("delete")
                        .about("Delete a table and its reservations")
                        .arg(id_arg())
                        .arg(dry_run_arg()),
                ]),
            Command::new("reservation")
                .about("Create, list and cancel reservations")
                .subcommands(vec![
                    Command::new("create")
                        .about("Book a table for a time slot")
                        .long_about(
                            "Book a table; fails with exit code 9 if the slot overlaps an existing reservation",
                        )
                        .arg(Arg::new("table-id").long("table-id").required(true))
                        .arg(Arg::new("customer").long("customer").required(true))
                        .arg(Arg::new("at").long("at").value_name("DATETIME").required(true))
                        .arg(Arg::new("duration").long("duration").value_name("MINUTES"))
                        .arg(format_arg(&["id", "json"]))
                        .arg(dry_run_arg()),
                    Command::new("list")
                        .about("List reservations")
                        .arg(Arg::new("table-id").long("table-id"))
                        .arg(Arg::new("customer").long("customer"))
                        .arg(Arg::new("time").long("time"))
                        .arg(format_arg(&["table", "json", "csv", "tsv"])),
                    Command::new("delete")
                        .about("Cancel a reservation")
                        .arg(id_arg())
                        .arg(dry_run_arg()),
                ]),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap_or_default());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("tablebook.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
