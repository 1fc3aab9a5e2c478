// Command-line interface for mdasset
//
// This binary reads a document, rewrites it into content assets with the mdasset-babel
// library and prints the resulting envelope as JSON.
//
// The source format is auto-detected from the file extension, while being overwrittable by
// an explicit --from flag.
// Usage:
//  mdasset <input> [--from <format>] [-o <file>] [--compact]          - Convert (default)
//  mdasset convert <input> [--from <format>] [-o <file>] [--compact]  - Same as above (explicit)
//  mdasset --list-formats                                            - List available input formats
//
// Configuration:
//
// Settings come from the built-in defaults, then ./mdasset.toml if present, then the file
// given with --config. Command-line flags win over all of them.
//
// Logging:
//
// Logs go to stderr. RUST_LOG takes precedence, then -v (info, -vv debug, -vvv trace), then
// the configured logging.level.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mdasset_babel::formats::MarkdownFormat;
use mdasset_babel::FormatRegistry;
use mdasset_config::{Loader, MdassetConfig, LOCAL_CONFIG_FILE};
use std::fs;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn build_cli() -> Command {
    Command::new("mdasset")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert markdown into content-asset JSON")
        .long_about(
            "mdasset rewrites markdown documents into the typed content assets of the\n\
            publishing system: paragraphs, headings, lists, listings, images, inline spans\n\
            and metadata records written as YAML in <!--- ... --> comments.\n\n\
            Examples:\n  \
            mdasset article.md                       # Pretty JSON to stdout\n  \
            mdasset article.md --compact -o out.json # Single-line JSON file\n  \
            mdasset doc.json --from pandoc-json      # Read a Pandoc JSON AST",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available input formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an mdasset.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more (repeat for debug and trace output)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document into content assets (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .help("Write JSON on a single line")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // A bare file argument means the convert subcommand was left out
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "convert"
                && args[1] != "help"
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let config = load_cli_config(
                matches.get_one::<String>("config").map(|s| s.as_str()),
                sub_matches,
            );
            init_logging(matches.get_count("verbose"), &config.logging.level);
            handle_convert_command(sub_matches, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches, config: &MdassetConfig) {
    let Some(input) = matches.get_one::<String>("input") else {
        eprintln!("Error: No input file given");
        std::process::exit(1);
    };

    let mut registry = FormatRegistry::default();
    registry.register(MarkdownFormat::new(config.markdown.into()));

    // Auto-detect --from if not provided
    let from = match matches.get_one::<String>("from") {
        Some(f) => f.to_string(),
        None => match registry.detect_format_from_filename(input) {
            Some(detected) => detected,
            None => {
                eprintln!("Error: Could not detect format from filename '{input}'");
                eprintln!("Please specify --from explicitly");
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = registry.get(&from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    info!(%input, format = %from, "converting");
    let conversion = registry.convert(&source, &from).unwrap_or_else(|e| {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    });
    debug!(blocks = conversion.blocks.len(), "conversion finished");

    let json = if config.output.pretty {
        conversion.to_json_pretty()
    } else {
        conversion.to_json()
    };
    let json = json.unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });

    match matches.get_one::<String>("output") {
        Some(path) => {
            fs::write(path, format!("{json}\n")).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => println!("{json}"),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for format_name in registry.list_formats() {
        let description = registry.description(&format_name).unwrap_or_default();
        println!("  {format_name:<12} {description}");
    }
}

fn load_cli_config(explicit_path: Option<&str>, matches: &ArgMatches) -> MdassetConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    let loader = if matches.get_flag("compact") {
        loader.set_override("output.pretty", false)
    } else {
        Ok(loader)
    };

    loader
        .and_then(Loader::build)
        .unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        })
}

fn init_logging(verbosity: u8, configured_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbosity {
        0 => EnvFilter::try_new(configured_level).unwrap_or_else(|err| {
            eprintln!("Invalid logging.level '{configured_level}': {err}");
            EnvFilter::new("warn")
        }),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
