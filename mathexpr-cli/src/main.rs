//! Command-line interface for mathexpr
//! This binary tokenizes, parses and renders math expression sources in different formats.
//!
//! Usage:
//!   mathexpr `<path>` [--format `<format>`] [--config `<file>`]   - Process a file (`-` reads stdin)
//!   mathexpr --expr `<source>` [--format `<format>`]             - Process an inline expression
//!   mathexpr --list-formats                                     - List all available formats

use clap::{Arg, ArgAction, Command};
use mathexpr_config::{Loader, MathexprConfig};
use mathexpr_parser::mathexpr::diag::Diagnostic;
use mathexpr_parser::mathexpr::pipeline::{
    available_formats, process_source, ProcessingError, ProcessingSpec,
};
use std::io;

fn main() {
    let matches = Command::new("mathexpr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and normalizing math expressions")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the source file, or '-' to read stdin")
                .required_unless_present_any(["expr", "list-formats"])
                .conflicts_with("expr")
                .index(1),
        )
        .arg(
            Arg::new("expr")
                .long("expr")
                .short('e')
                .help("Source text to process instead of a file"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default: inspect.default_format from the config)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(matches.get_one::<String>("config"));
    let format = matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or_else(|| config.inspect.default_format.clone());

    let (name, source) = match matches.get_one::<String>("expr") {
        Some(expr) => ("<expr>".to_string(), expr.clone()),
        None => {
            let path = matches.get_one::<String>("path").map_or("-", String::as_str);
            read_input(path)
        }
    };

    handle_process_command(&config, &format, &name, &source);
}

fn load_config(path: Option<&String>) -> MathexprConfig {
    let mut loader = Loader::new();
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Read the source text, from stdin when `path` is `-`
fn read_input(path: &str) -> (String, String) {
    let result = if path == "-" {
        io::read_to_string(io::stdin())
    } else {
        std::fs::read_to_string(path)
    };
    match result {
        Ok(source) => {
            let name = if path == "-" { "<stdin>" } else { path };
            (name.to_string(), source)
        }
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            std::process::exit(1);
        }
    }
}

/// Handle the process command
fn handle_process_command(config: &MathexprConfig, format: &str, name: &str, source: &str) {
    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable formats:");
        for format in available_formats() {
            eprintln!("  {}", format);
        }
        std::process::exit(1);
    });

    match process_source(source, &spec, &config.processing_options()) {
        Ok(output) => {
            print!("{}", output);
            if !output.is_empty() && !output.ends_with('\n') {
                println!();
            }
        }
        Err(ProcessingError::Syntax(err)) => {
            let diagnostic = Diagnostic::from_error(err, Some(name.to_string()), source);
            eprintln!("{:?}", miette::Report::new(diagnostic));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
