//! Sibil Lexer CLI
//!
//! Command-line interface that prints the token stream of a Sibil source
//! buffer.

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use colored::Colorize;
use log::{info, LevelFilter};

use sibil_lexer::{Diagnostic, Scanner, SibilError, SibilResult, Token, TokenKind, VERSION};

#[derive(Parser)]
#[command(name = "sibil")]
#[command(author, version, about = "Tokenize Sibil S-expression source", long_about = None)]
struct Cli {
    /// Source file to scan (`-` or omitted reads stdin)
    input: Option<PathBuf>,

    /// Treat skipped characters other than whitespace as errors
    #[arg(long)]
    strict: bool,

    /// Report skipped characters other than whitespace as warnings
    #[arg(long, conflicts_with = "strict")]
    warn_skipped: bool,

    /// Start an interactive session that tokenizes each line
    #[arg(long, conflicts_with = "input")]
    repl: bool,

    /// When to color output
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorChoice,

    /// Increase logging verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// How skipped characters are handled after a scan
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SkipPolicy {
    Ignore,
    Warn,
    Reject,
}

impl Cli {
    fn skip_policy(&self) -> SkipPolicy {
        if self.strict {
            SkipPolicy::Reject
        } else if self.warn_skipped {
            SkipPolicy::Warn
        } else {
            SkipPolicy::Ignore
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.color {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {}
    }

    if cli.repl || (cli.input.is_none() && io::stdin().is_terminal()) {
        println!("Sibil v{} - Lexer", VERSION);
        println!("Type 'exit' to quit\n");
        repl(cli.skip_policy());
        return;
    }

    let name = match cli.input {
        Some(ref path) if path.as_os_str() != "-" => path.display().to_string(),
        _ => "<stdin>".to_string(),
    };

    let source = match read_source(cli.input.as_ref()) {
        Ok(source) => source,
        Err(e) => {
            eprint!("{}", Diagnostic::new(&e));
            process::exit(1);
        }
    };

    if !show_tokens(&source, &name, cli.skip_policy()) {
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Read the whole input buffer from a file or stdin
fn read_source(input: Option<&PathBuf>) -> SibilResult<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            info!("reading {}", path.display());
            fs::read_to_string(path).map_err(|e| SibilError::io(path.display().to_string(), &e))
        }
        _ => {
            info!("reading stdin");
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| SibilError::io("<stdin>", &e))?;
            Ok(source)
        }
    }
}

/// Print the tokens of `source`, returning false if strict mode rejected it
fn show_tokens(source: &str, name: &str, policy: SkipPolicy) -> bool {
    let mut scanner = Scanner::with_filename(source, name);
    let tokens = scanner.tokenize();
    let unexpected = scanner.into_skipped();

    if policy == SkipPolicy::Reject && !unexpected.is_empty() {
        for skipped in &unexpected {
            let error = SibilError::unexpected_character(skipped.character, skipped.location.clone());
            eprint!("{}", Diagnostic::new(&error).with_source(source));
        }
        return false;
    }

    if policy == SkipPolicy::Warn {
        for skipped in &unexpected {
            eprint!("{}", Diagnostic::warning(skipped).with_source(source));
        }
    }

    println!("Tokens for '{}':", name);
    println!("{}", "=".repeat(60));

    for (i, token) in tokens.iter().enumerate() {
        println!("{}", format_token(i, token));
    }

    println!("{}", "=".repeat(60));
    println!("Total tokens: {}", tokens.len());

    true
}

fn format_token(index: usize, token: &Token) -> String {
    let kind = format!("{:12}", token.kind.name());
    let kind = match token.kind {
        TokenKind::LeftParen | TokenKind::RightParen => kind.cyan(),
        TokenKind::Identifier => kind.green(),
    };
    format!("{:4}: {} | {:?} @ {}", index, kind, token.lexeme, token.location)
}

/// Start an interactive session that tokenizes each line
fn repl(policy: SkipPolicy) {
    let mut line_number = 1;

    loop {
        print!("sibil:{} > ", line_number);
        if let Err(e) = io::stdout().flush() {
            eprintln!("Error writing prompt: {}", e);
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {
                let input = input.trim();

                if input == "exit" || input == "quit" {
                    break;
                }

                if input.is_empty() {
                    continue;
                }

                show_tokens(input, &format!("<repl:{}>", line_number), policy);
                line_number += 1;
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }

    println!("\nGoodbye!");
}
