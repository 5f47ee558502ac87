// Command-line interface for tgmd
//
// This binary converts text into Telegram MarkdownV2, escapes plain text for it,
// validates MarkdownV2 and runs batches of named operations.
//
// All of the work happens in the tgmd-babel crate. This binary only reads input,
// layers configuration, and prints results.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file extension,
// while being overwrittable by an explicit --from flag. Input `-` reads stdin and is read as markdown.
// Usage:
//  tgmd <input> [--to <format>] [--from <format>] [--output <file>]  - Convert between formats (default)
//  tgmd convert <input> [--to <format>] [--from <format>] [--output <file>]  - Same as above (explicit)
//  tgmd escape <input>                   - Escape every MarkdownV2 special character
//  tgmd validate <input> [--strict]      - Print a JSON validation result, exit 1 when invalid
//  tgmd batch <items.json> [--continue-on-fail]  - Run a JSON array of operations
//  tgmd --list-formats                   - List available formats and operations
//
// Extra Parameters:
//
// Engine options can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and applies them over the loaded configuration.
// Example:
//  tgmd notes.md --extra-auto-escape false

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use std::io;
use tgmd_babel::operations::{OperationOptions, AVAILABLE_OPERATIONS};
use tgmd_babel::options::parse_bool;
use tgmd_babel::{escape_literal_text, run_batch, validate_with, BatchItem, FormatRegistry};
use tgmd_config::{Loader, TgmdConfig};
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "escape", "validate", "batch", "help"];

/// Keys the engine options understand. Anything else passed as `--extra-*` is ignored.
const CONVERSION_KEYS: &[&str] = &[
    "convert-html-tags",
    "auto-escape",
    "preserve-line-breaks",
    "strict-mode",
];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .map(|next| !next.starts_with('-'))
                .unwrap_or(false);

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path, or '-' for stdin")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("tgmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert, escape and validate Telegram MarkdownV2")
        .long_about(
            "tgmd is a command-line tool for producing Telegram MarkdownV2.\n\n\
            Commands:\n  \
            - convert:  Convert between markdown, html, text and MarkdownV2 (default)\n  \
            - escape:   Escape every MarkdownV2 special character\n  \
            - validate: Check MarkdownV2 for formatting problems\n  \
            - batch:    Run a JSON array of named operations\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override engine options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            tgmd notes.md                           # Markdown to MarkdownV2 (stdout)\n  \
            tgmd notes.md --to html -o notes.html   # Render through MarkdownV2 to HTML\n  \
            tgmd escape price.txt                   # Escape literal text\n  \
            cat msg.mdv2 | tgmd validate - --strict # Validate from stdin",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .about("Convert between formats through MarkdownV2 (default command)")
                .long_about(
                    "Convert text between formats. Every conversion passes through MarkdownV2.\n\n\
                    Supported formats:\n  \
                    - markdown: Markdown (.md), read only\n  \
                    - html:     Telegram's HTML subset (.html)\n  \
                    - text:     Plain text (.txt)\n  \
                    - telegram: MarkdownV2 itself (.mdv2)\n\n\
                    The source format is auto-detected from the file extension and\n\
                    falls back to markdown. Output goes to stdout by default.",
                )
                .arg(input_arg())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .default_value("telegram")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
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
                .long_about(
                    "Check MarkdownV2 text for unmatched delimiters, unescaped characters\n\
                    and suspicious nesting. The result is printed as JSON and the exit\n\
                    status is 1 when the text is invalid.",
                )
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
                .about("Run a JSON array of {\"operation\", \"text\"} items")
                .arg(input_arg())
                .arg(
                    Arg::new("continue-on-fail")
                        .long("continue-on-fail")
                        .help("Record failing items and keep going")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A leading path means the user meant `convert`
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    let options = operation_options(&config, &extra_params);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => handle_convert_command(sub_matches, &options),
        Some(("escape", sub_matches)) => {
            let source = read_input(required(sub_matches, "input"));
            print!("{}", escape_literal_text(&source));
        }
        Some(("validate", sub_matches)) => {
            let mut options = options;
            options.validation.strict |= sub_matches.get_flag("strict");
            handle_validate_command(required(sub_matches, "input"), &options);
        }
        Some(("batch", sub_matches)) => {
            let continue_on_fail = sub_matches.get_flag("continue-on-fail")
                || continue_on_fail_override(&extra_params)
                    .unwrap_or(config.batch.continue_on_fail);
            handle_batch_command(required(sub_matches, "input"), &options, continue_on_fail);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    match matches.get_one::<String>(id) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("Error: missing required argument '{id}'");
            std::process::exit(2);
        }
    }
}

/// Read a file, or stdin when `path` is `-`
fn read_input(path: &str) -> String {
    let result = if path == "-" {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error reading '{path}': {e}");
        std::process::exit(1);
    })
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches, options: &OperationOptions) {
    let input = required(matches, "input");
    let to = required(matches, "to");
    let registry = FormatRegistry::default();

    let from = match matches.get_one::<String>("from") {
        Some(from) => from.to_string(),
        None => registry
            .detect_format_from_filename(input)
            .unwrap_or_else(|| "markdown".to_string()),
    };
    tracing::debug!(input, %from, to, "converting");

    let source = read_input(input);
    let result = registry
        .convert(&source, &from, to, &options.conversion, &options.render)
        .unwrap_or_else(|e| {
            eprintln!("Conversion error: {e}");
            std::process::exit(1);
        });

    match matches.get_one::<String>("output") {
        Some(path) => fs::write(path, result).unwrap_or_else(|e| {
            eprintln!("Error writing file '{path}': {e}");
            std::process::exit(1);
        }),
        None => print!("{result}"),
    }
}

/// Handle the validate command
fn handle_validate_command(input: &str, options: &OperationOptions) {
    let source = read_input(input);
    let result = validate_with(&source, &options.validation);

    print_json(&result);
    if !result.is_valid {
        std::process::exit(1);
    }
}

/// Handle the batch command
fn handle_batch_command(input: &str, options: &OperationOptions, continue_on_fail: bool) {
    let source = read_input(input);
    let items: Vec<BatchItem> = serde_json::from_str(&source).unwrap_or_else(|e| {
        eprintln!("Error reading batch items from '{input}': {e}");
        std::process::exit(1);
    });

    let results = run_batch(&items, options, continue_on_fail).unwrap_or_else(|e| {
        eprintln!("Batch error: {e}");
        std::process::exit(1);
    });
    print_json(&results);
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error encoding JSON: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();

    println!("Conversion formats:");
    for format_name in registry.list_formats() {
        if let Ok(format) = registry.get(&format_name) {
            let direction = match (format.supports_parsing(), format.supports_serialization()) {
                (true, true) => "read/write",
                (true, false) => "read",
                (false, true) => "write",
                (false, false) => "-",
            };
            println!(
                "  {format_name:<10} {direction:<11} {}",
                format.description()
            );
        }
    }

    println!("\nOperations:");
    for (name, description) in AVAILABLE_OPERATIONS {
        println!("  {name:<14} {description}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> TgmdConfig {
    let loader = Loader::new().with_optional_file("tgmd.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Configured options with `--extra-*` overrides applied on top.
fn operation_options(config: &TgmdConfig, extra_params: &HashMap<String, String>) -> OperationOptions {
    for key in extra_params.keys() {
        if !CONVERSION_KEYS.contains(&key.as_str())
            && key != "strict"
            && key != "continue-on-fail"
        {
            tracing::warn!(key = %key, "ignoring unknown --extra option");
        }
    }

    let mut options = config.operation_options().unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    });
    if let Err(e) = options.conversion.apply_params(extra_params) {
        eprintln!("{e}");
        std::process::exit(1);
    }
    if let Some(raw) = extra_params.get("strict") {
        options.validation.strict = parse_bool_arg("strict", raw);
    }
    options
}

fn continue_on_fail_override(extra_params: &HashMap<String, String>) -> Option<bool> {
    extra_params
        .get("continue-on-fail")
        .map(|raw| parse_bool_arg("continue-on-fail", raw))
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    parse_bool(flag, raw).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}
