use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the formats registered by FormatRegistry::with_defaults
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_FORMATS: &[&str] = &["markdown", "html", "text", "telegram"];

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path, or '-' for stdin")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=build.rs");

    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("tgmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert, escape and validate Telegram MarkdownV2")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and operations")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a tgmd.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log engine activity to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between formats through MarkdownV2")
                .arg(input_arg())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format")
                        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS)),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("escape")
                .about("Escape every MarkdownV2 special character")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("validate")
                .about("Check MarkdownV2 and print the result as JSON")
                .arg(input_arg())
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Also report empty formatting and bracketed text without a link")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("batch")
                .about("Run a JSON array of operations")
                .arg(input_arg())
                .arg(
                    Arg::new("continue-on-fail")
                        .long("continue-on-fail")
                        .help("Record failing items and keep going")
                        .action(ArgAction::SetTrue),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "tgmd", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "tgmd", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "tgmd", &outdir)?;

    Ok(())
}
