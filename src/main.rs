//! Flex Infer CLI
//!
//! Usage:
//!   flex-infer [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>  Layout tolerance overrides (TOML format)
//!   --compact            Print the annotated tree as single-line JSON
//!   -o, --outline        Print a text outline instead of JSON
//!   -v, --verbose        Log per-container decisions and statistics
//!   -h, --help           Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;

use flex_infer::{infer_tree, outline, parse, LayoutConfig, LayoutStats};

#[derive(Parser)]
#[command(name = "flex-infer")]
#[command(about = "Infer flex layouts for absolutely positioned design trees")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Layout tolerance overrides (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

    /// Print a text outline of the inferred layouts instead of JSON
    #[arg(short, long)]
    outline: bool,

    /// Log per-container decisions and layout statistics
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load tolerances
    let config = match &cli.config {
        Some(path) => match LayoutConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => LayoutConfig::default(),
    };

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let root = match parse(&source) {
        Ok(root) => root,
        Err(e) => {
            eprint!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    };

    let tree = infer_tree(&root, &config);

    if cli.verbose {
        let stats = LayoutStats::collect(&tree);
        log::info!(
            "{} container(s): {} row, {} column, {} mix; {} nested group(s), {} absolute child(ren), {} grid(s)",
            stats.containers,
            stats.rows,
            stats.columns,
            stats.mixes,
            stats.groups,
            stats.absolute,
            stats.grids
        );
    }

    if cli.outline {
        print!("{}", outline(&tree));
        return;
    }

    let json = if cli.compact {
        serde_json::to_string(&tree)
    } else {
        serde_json::to_string_pretty(&tree)
    };
    match json {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"Flex Infer - Layout inference for absolutely positioned design trees

USAGE:
    flex-infer [OPTIONS] [FILE]
    cat tree.json | flex-infer

OPTIONS:
    -c, --config     Layout tolerance overrides (TOML file)
    --compact        Single-line JSON output
    -o, --outline    Text outline instead of JSON
    -v, --verbose    Log layout decisions and statistics
    -h, --help       Print help

INPUT:
    A JSON node {{"id", "componentName", "frame": {{"left", "top", "width", "height"}}, "children"}}.
    Every container in the output carries a "layout" object with its inferred flex layout."#
    );
}
