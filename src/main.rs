use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

use tinylex::lexer::{format_tokens, keywords, tokenize, Scanner};
use tinylex::{reject_illegal, TinylexError};

#[derive(Parser)]
#[command(name = "tinylex")]
#[command(author, version, about = "Lexical scanner for a small C-like scripting language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// One token per line (default)
    #[value(name = "text")]
    Text,
    /// JSON array of {kind, text} objects
    #[value(name = "json")]
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token stream of a source file
    Tokens {
        /// The source file to scan, or `-` for stdin
        input: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Fail if a source file contains illegal characters
    Check {
        /// The source file to scan, or `-` for stdin
        input: PathBuf,
    },

    /// List the reserved words
    Keywords,

    /// Start an interactive REPL that prints tokens for each line
    Repl,
}

fn main() -> Result<()> {
    // Initialize logger before parsing CLI args
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let result = match cli.command {
        Commands::Tokens { input, format } => dump_tokens(&input, format),
        Commands::Check { input } => check(&input),
        Commands::Keywords => list_keywords(),
        Commands::Repl => repl(),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn read_source(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read source from stdin")?;
        return Ok(source);
    }

    fs::read_to_string(input).map_err(|e| {
        TinylexError::Io {
            path: input.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

fn dump_tokens(input: &Path, format: OutputFormat) -> Result<()> {
    log::debug!("Scanning {:?}", input);
    let source = read_source(input)?;
    let tokens = tokenize(&source);

    match format {
        OutputFormat::Text => println!("{}", format_tokens(&tokens)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tokens)?),
    }

    Ok(())
}

fn check(input: &Path) -> Result<()> {
    log::info!("Checking {:?}", input);
    let source = read_source(input)?;
    let tokens = tokenize(&source);

    reject_illegal(&tokens)?;

    println!("{}: no illegal characters", "success".green().bold());
    Ok(())
}

fn list_keywords() -> Result<()> {
    println!("{}", "=== Keywords ===".blue().bold());
    for (spelling, kind) in keywords() {
        println!("{:8} {}", spelling, kind);
    }
    Ok(())
}

fn repl() -> Result<()> {
    println!("{}", "tinylex REPL".blue().bold());
    println!("Type ':quit' or ':q' to exit, ':help' for help\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!(">> ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from stdin")?;

        match line.trim() {
            ":quit" | ":q" => break,
            ":help" | ":h" => {
                println!("REPL commands:");
                println!("  :quit, :q    Exit the REPL");
                println!("  :help, :h    Show this help message");
                println!("\nAny other input is scanned and its tokens printed.");
                continue;
            }
            "" => continue,
            _ => {}
        }

        for token in Scanner::new(&line) {
            println!("{}", token);
        }
    }

    println!("Goodbye!");
    Ok(())
}
