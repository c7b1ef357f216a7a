// Command-line interface for wamark
//
// Converts HTML snapshots produced by a rich-text editing surface into WhatsApp
// text, and exposes the intermediate stages for inspection.
//
// Usage:
//  wamark <input> [--to whatsapp] [--from html] [-o <file>]          - Convert (default)
//  wamark convert <input> [--to whatsapp] [--from html] [-o <file>]  - Same as above (explicit)
//  wamark inspect <path> [relocated|whatsapp|stats]                   - Show a conversion stage
//  wamark toolbar [--json]                                            - Show the configured toolbar
//  wamark --list-formats                                              - List formats and transforms
//
// An input of "-" reads the snapshot from stdin.
//
// Extra Parameters:
//
// Converter options can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix; known keys update the loaded
// configuration and anything left is handed to the target format.
// Example:
//  wamark message.html --extra-relocation passes --extra-passes 4

use clap::{Arg, ArgAction, Command, ValueHint};
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use wamark_babel::transforms::{self, AVAILABLE_TRANSFORMS};
use wamark_babel::formats::whatsapp::parse_bool;
use wamark_babel::{FormatRegistry, Relocation};
use wamark_config::{Loader, RelocationMode, WamarkConfig};
use wamark_editor::action::resolve_actions;
use wamark_editor::{ClassNames, Toolbar};

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "toolbar", "help"];
const STDIN_PATH: &str = "-";

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
            let has_value = i + 1 < args.len() && !args[i + 1].starts_with('-');

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

fn build_cli() -> Command {
    Command::new("wamark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert rich-text editor markup into WhatsApp text")
        .long_about(
            "wamark converts the HTML produced by a content-editable surface into\n\
            WhatsApp's plain-text emphasis markers: *bold*, _italic_, ~strike~.\n\n\
            Commands:\n  \
            - convert: Convert a snapshot (default command)\n  \
            - inspect: Show a single conversion stage\n  \
            - toolbar: Show the editor toolbar resolved from configuration\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass converter options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            wamark message.html                       # Convert to stdout\n  \
            echo '<b>hi</b>' | wamark -               # Convert stdin\n  \
            wamark message.html -o message.wa         # Write to a file\n  \
            wamark inspect message.html stats         # Tag and whitespace counts",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a wamark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log conversion details to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a snapshot between formats (default command)")
                .long_about(
                    "Convert an HTML snapshot into WhatsApp text.\n\n\
                    Supported formats:\n  \
                    - html:     Editor snapshot (.html, .htm)\n  \
                    - whatsapp: WhatsApp text (.wa, .whatsapp, .txt)\n\n\
                    The source format is auto-detected from the file extension;\n\
                    stdin (-) is read as html. Output goes to stdout by default.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
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
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .default_value("whatsapp")
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
            Command::new("inspect")
                .about("Show one stage of the conversion")
                .long_about(
                    "Transforms:\n  \
                    - relocated: Snapshot after whitespace relocation, tags still present\n  \
                    - whatsapp:  Full conversion (default)\n  \
                    - stats:     JSON counts of tags, markers and whitespace",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the snapshot, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'whatsapp'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("toolbar")
                .about("Show the editor toolbar resolved from configuration")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the toolbar as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A bare input path means the implicit convert subcommand
            let first = cleaned_args.get(1).map(String::as_str);
            let looks_like_input = matches!(first, Some(arg) if arg == STDIN_PATH
                || (!arg.starts_with('-') && !SUBCOMMANDS.contains(&arg)));
            if looks_like_input {
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

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches
                .get_one::<String>("to")
                .expect("to has a default");
            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => detect_source_format(input),
            };
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or("whatsapp");
            handle_inspect_command(path, transform, &extra_params, &config);
        }
        Some(("toolbar", sub_matches)) => {
            handle_toolbar_command(sub_matches.get_flag("json"), &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn detect_source_format(input: &str) -> String {
    if input == STDIN_PATH {
        return "html".to_string();
    }
    let registry = FormatRegistry::default();
    match registry.detect_format_from_filename(input) {
        Some(detected) => detected,
        None => {
            eprintln!("Error: Could not detect format from filename '{input}'");
            eprintln!("Please specify --from explicitly");
            std::process::exit(1);
        }
    }
}

fn read_source(path: &str) -> String {
    let result = if path == STDIN_PATH {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map(|_| buffer)
    } else {
        fs::read_to_string(path)
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &WamarkConfig,
) {
    let registry = FormatRegistry::default();

    for name in [from, to] {
        if let Err(e) = registry.get(name) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let source = read_source(input);

    let mut format_options = HashMap::new();
    if to == "whatsapp" {
        format_options = convert_params_from_config(config);
    }
    for (key, value) in extra_params {
        format_options.insert(key.clone(), value.clone());
    }
    debug!("convert {from} -> {to} with {format_options:?}");

    let result = registry
        .convert(&source, from, to, &format_options)
        .unwrap_or_else(|e| {
            eprintln!("Conversion error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{result}"),
    }
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &WamarkConfig,
) {
    let source = read_source(path);

    let mut params = convert_params_from_config(config);
    for (key, value) in extra_params {
        params.insert(key.clone(), value.clone());
    }

    let output = transforms::execute_transform(&source, transform, &params).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

/// Handle the toolbar command
fn handle_toolbar_command(json: bool, config: &WamarkConfig) {
    let configuration = config.editor.to_configuration(|_| {});
    let actions = resolve_actions(configuration.actions.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    let classes = ClassNames::default().merged(&configuration.classes);
    let toolbar = Toolbar::build(&actions, &classes);

    if json {
        let buttons: Vec<_> = toolbar
            .buttons
            .iter()
            .map(|button| {
                serde_json::json!({
                    "name": button.name,
                    "icon": button.icon,
                    "title": button.title,
                    "class": button.class_list(&classes),
                })
            })
            .collect();
        let document = serde_json::json!({
            "class": toolbar.class,
            "content_class": classes.content,
            "paragraph_separator": config.editor.default_paragraph_separator,
            "buttons": buttons,
        });
        match serde_json::to_string_pretty(&document) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("{} (content: {})", toolbar.class, classes.content);
    for button in &toolbar.buttons {
        println!("  {:<14} {:<16} {}", button.name, button.title, button.icon);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Conversion formats:");
    for format_name in registry.list_formats() {
        let description = registry
            .get(&format_name)
            .map(|f| f.description().to_string())
            .unwrap_or_default();
        println!("  {format_name:<10} {description}");
    }

    println!("\nTransforms:");
    for transform_name in AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> WamarkConfig {
    let loader = Loader::new().with_optional_file("wamark.toml");
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

fn apply_config_overrides(config: &mut WamarkConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("relocation") {
        match raw.parse::<Relocation>() {
            Ok(Relocation::FixedPoint) => config.convert.relocation = RelocationMode::FixedPoint,
            Ok(Relocation::Passes(count)) => {
                config.convert.relocation = RelocationMode::Passes;
                config.convert.passes = count;
            }
            Err(err) => {
                eprintln!("Invalid relocation mode '{raw}' for --extra-relocation: {err}");
                std::process::exit(1);
            }
        }
    }
    if let Some(raw) = extra_params.remove("passes") {
        config.convert.passes = raw.parse().unwrap_or_else(|_| {
            eprintln!("Invalid pass count '{raw}' for --extra-passes");
            std::process::exit(1);
        });
        config.convert.relocation = RelocationMode::Passes;
    }
    if let Some(raw) = take_override(extra_params, &["decode-nbsp", "decode"]) {
        config.convert.decode_nbsp = parse_bool_arg("decode-nbsp", &raw);
    }
}

fn convert_params_from_config(config: &WamarkConfig) -> HashMap<String, String> {
    let mut params = HashMap::new();
    let relocation = match config.convert.relocation {
        RelocationMode::FixedPoint => "fixed-point".to_string(),
        RelocationMode::Passes => format!("passes:{}", config.convert.passes),
    };
    params.insert("relocation".to_string(), relocation);
    params.insert(
        "decode-nbsp".to_string(),
        config.convert.decode_nbsp.to_string(),
    );
    params
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    parse_bool(raw).unwrap_or_else(|| {
        eprintln!("Invalid boolean value '{raw}' for --extra-{flag}");
        std::process::exit(1);
    })
}
