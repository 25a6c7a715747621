//! minic command line interface
//!
//! Usage:
//!   minic <input-file>                 # lex + parse, print the verdict
//!   minic --emit tokens a.c            # print the token table
//!   minic --emit tokens-json a.c -o a.tokens.json
//!   minic --from-tokens a.tokens.json  # parse a serialized token stream

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, ValueEnum};
use log::{debug, info};
use minic::lexer::{Token, TokenStream};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Front end for a minimal C-like language
#[derive(ClapParser, Debug)]
#[command(name = "minic")]
#[command(version)]
#[command(about = "Lexes and parses a minimal C-like language", long_about = None)]
struct Cli {
    /// Input file: source text, or a token-stream JSON with --from-tokens
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// What to emit
    #[arg(long, default_value = "verdict")]
    emit: EmitKind,

    /// Treat the input as a serialized token stream instead of source text
    #[arg(long)]
    from_tokens: bool,

    /// Verbose output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EmitKind {
    /// Accept/reject verdict from the parser
    Verdict,
    /// Human-readable token table
    Tokens,
    /// Token stream as JSON (the lexer-to-parser handoff)
    TokensJson,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        log::LevelFilter::Error
    } else {
        match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    info!("minic v{}", minic::VERSION);
    debug!("input file: {:?}", cli.input);

    let stream = load_stream(&cli)?;
    info!("lexed {} token(s)", stream.len());

    match cli.emit {
        EmitKind::Tokens => {
            write_output(&cli.output, &render_token_table(&stream))?;
            Ok(ExitCode::SUCCESS)
        }
        EmitKind::TokensJson => {
            let json = serde_json::to_string_pretty(stream.tokens())
                .context("Failed to serialize token stream")?;
            write_output(&cli.output, &json)?;
            Ok(ExitCode::SUCCESS)
        }
        EmitKind::Verdict => {
            let verdict = minic::parser::parse(&stream)
                .context("Failed to translate tokens for the parser")?;
            write_output(&cli.output, &format!("{}\n", verdict))?;
            if verdict.is_accepted() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn load_stream(cli: &Cli) -> Result<TokenStream> {
    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read input file: {:?}", cli.input))?;

    if cli.from_tokens {
        let tokens: Vec<Token> =
            serde_json::from_str(&text).context("Failed to parse token stream JSON")?;
        let stream = TokenStream::from_tokens(tokens).context("Invalid token stream")?;
        Ok(stream)
    } else {
        let stream = minic::tokenize(&text)?;
        Ok(stream)
    }
}

/// Render the token table the way the lexer's output file prints it.
fn render_token_table(stream: &TokenStream) -> String {
    const RULE: &str = "+------------------------------+------------------------------+\n";
    let mut out = String::new();
    out.push_str(RULE);
    let _ = writeln!(out, "| {:<28} | {:<28} |", "Token Name", "Token Value");
    for token in stream {
        out.push_str(RULE);
        let _ = writeln!(out, "| {:<28} | {:<28} |", token.category.name(), token.lexeme);
    }
    out.push_str(RULE);
    out
}

fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(p) => {
            fs::write(p, content).with_context(|| format!("Failed to write output file: {:?}", p))?;
        }
        None => print!("{}", content),
    }
    Ok(())
}
