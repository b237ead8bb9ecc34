//! Postt CLI - Syntax highlighting for Python source.
//!
//! This is the main entry point for the postt CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use posti_render::OutputFormat;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    run_highlight, run_init_config, run_tokens, HighlightArgs, InitConfigArgs, TokensArgs,
};
use config::Config;
use error::{PosttError, Result};

/// Postt - A syntax highlighter for Python source
///
/// Postt scans Python files and renders them as HTML, ANSI terminal
/// output, plain text or a JSON token list.
#[derive(Parser, Debug)]
#[command(name = "postt")]
#[command(author = "Posti Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A syntax highlighter for Python source", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "POSTT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "POSTT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "POSTT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the postt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Highlight source files
    ///
    /// Renders each input to stdout, or to one file per input with
    /// --output.
    Highlight(HighlightCommand),

    /// Print the token stream of a file
    ///
    /// One line per token: class, byte offset and escaped text.
    Tokens(TokensCommand),

    /// Write a default configuration file
    InitConfig(InitConfigCommand),
}

/// Arguments for the highlight subcommand.
#[derive(Parser, Debug)]
struct HighlightCommand {
    /// Input files (`-` for stdin)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output format (html, ansi, plain, json)
    #[arg(short = 'F', long, value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wrap HTML in <pre>, pretty-print JSON
    #[arg(short, long)]
    standalone: bool,

    /// Overwrite existing output files
    #[arg(short, long)]
    force: bool,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// File to scan (`-` for stdin)
    input: PathBuf,
}

/// Arguments for the init-config subcommand.
#[derive(Parser, Debug)]
struct InitConfigCommand {
    /// Destination file or directory (default: ./postt.toml)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(short, long)]
    force: bool,
}

fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Main entry point for the postt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    let color = !cli.no_color && posti_render::stdout_supports_color();
    execute_command(cli.command, color, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr; stdout carries rendered output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| PosttError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, color: bool, config: Config) -> Result<()> {
    match command {
        Commands::Highlight(args) => execute_highlight(args, color, config),
        Commands::Tokens(args) => run_tokens(TokensArgs { input: args.input }),
        Commands::InitConfig(args) => run_init_config(InitConfigArgs {
            path: args.path,
            force: args.force,
        }),
    }
}

/// Execute the highlight command.
fn execute_highlight(args: HighlightCommand, color: bool, config: Config) -> Result<()> {
    let highlight_args = HighlightArgs {
        input: args.input,
        format: args.format,
        output: args.output,
        standalone: args.standalone,
        force: args.force,
        color,
    };
    run_highlight(highlight_args, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_highlight() {
        let cli = Cli::parse_from(["postt", "highlight", "main.py"]);
        if let Commands::Highlight(args) = cli.command {
            assert_eq!(args.input, vec![PathBuf::from("main.py")]);
            assert!(args.format.is_none());
            assert!(!args.standalone);
        } else {
            panic!("Expected Highlight command");
        }
    }

    #[test]
    fn test_cli_parse_highlight_requires_input() {
        assert!(Cli::try_parse_from(["postt", "highlight"]).is_err());
    }

    #[test]
    fn test_cli_parse_highlight_with_format() {
        let cli = Cli::parse_from(["postt", "highlight", "a.py", "--format", "JSON"]);
        if let Commands::Highlight(args) = cli.command {
            assert_eq!(args.format, Some(OutputFormat::Json));
        } else {
            panic!("Expected Highlight command");
        }
    }

    #[test]
    fn test_cli_parse_highlight_unknown_format() {
        let result = Cli::try_parse_from(["postt", "highlight", "a.py", "-F", "pdf"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_highlight_output_options() {
        let cli = Cli::parse_from([
            "postt", "highlight", "a.py", "b.py", "-o", "out", "--standalone", "--force",
        ]);
        if let Commands::Highlight(args) = cli.command {
            assert_eq!(args.input.len(), 2);
            assert_eq!(args.output, Some(PathBuf::from("out")));
            assert!(args.standalone);
            assert!(args.force);
        } else {
            panic!("Expected Highlight command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_stdin() {
        let cli = Cli::parse_from(["postt", "tokens", "-"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("-"));
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_init_config() {
        let cli = Cli::parse_from(["postt", "init-config", "--path", "/tmp/postt.toml", "--force"]);
        if let Commands::InitConfig(args) = cli.command {
            assert_eq!(args.path, Some(PathBuf::from("/tmp/postt.toml")));
            assert!(args.force);
        } else {
            panic!("Expected InitConfig command");
        }
    }

    #[test]
    fn test_cli_parse_global_verbose() {
        let cli = Cli::parse_from(["postt", "--verbose", "tokens", "a.py"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_global_config() {
        let cli = Cli::parse_from(["postt", "tokens", "a.py", "--config", "/path/to/postt.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/postt.toml")));
    }

    #[test]
    fn test_cli_parse_global_no_color() {
        let cli = Cli::parse_from(["postt", "--no-color", "tokens", "a.py"]);
        assert!(cli.no_color);
    }
}
