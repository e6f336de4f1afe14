use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser as ClapParser;
use intlang::{
    errors::errors::{Error, ErrorTip},
    get_line_at_position,
    lexer::lexer::{tokenize, Lexer},
    parser::parser::Parser,
};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = ">>> ";

/// intLANG - parse programs or explore the language line by line
#[derive(ClapParser)]
#[command(name = "intlang")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file to parse; starts the REPL when omitted
    file: Option<PathBuf>,

    /// Print the token stream instead of the syntax tree
    #[arg(long)]
    tokens: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_writer(io::stderr)
        .init();

    match &cli.file {
        Some(file) => run_file(file, cli.tokens),
        None => match run_repl(io::stdin().lock(), io::stdout(), cli.tokens) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!("repl I/O failed: {}", err);
                ExitCode::FAILURE
            }
        },
    }
}

fn run_file(file: &Path, show_tokens: bool) -> ExitCode {
    let source = match read_to_string(file) {
        Ok(source) => source,
        Err(err) => {
            error!("failed to read {}: {}", file.display(), err);
            return ExitCode::FAILURE;
        }
    };
    debug!(bytes = source.len(), "read {}", file.display());

    let mut out = io::stdout();
    match process(&source, show_tokens, &mut out) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("failed to write output: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Reads lines until end of input, parsing each one on its own.
fn run_repl<R: BufRead, W: Write>(input: R, mut out: W, show_tokens: bool) -> io::Result<()> {
    writeln!(out, "Welcome to the intLANG programming language")?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };

        process(&line?, show_tokens, &mut out)?;
    }
}

/// Parses `source` and prints either the tree or every error.
///
/// Returns whether the source parsed cleanly.
fn process<W: Write>(source: &str, show_tokens: bool, out: &mut W) -> io::Result<bool> {
    if show_tokens {
        for token in tokenize(source) {
            writeln!(out, "{}", token)?;
        }
        return Ok(true);
    }

    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        for error in parser.errors() {
            display_error(out, error, source)?;
        }
        return Ok(false);
    }

    if !program.is_empty() {
        writeln!(out, "{}", program)?;
    }

    Ok(true)
}

fn display_error<W: Write>(out: &mut W, error: &Error, source: &str) -> io::Result<()> {
    /*
        Error[UnexpectedToken]: expected identifier but got integer
           |
        1  | @ 5 = x;
           | --^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        writeln!(out, "Error[{}]: {}", error.get_error_name(), error)?;
    } else {
        writeln!(out, "Error[{}]: {} ({})", error.get_error_name(), error, error.get_tip())?;
    }
    writeln!(out, "{:>padding$}", "|")?;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    writeln!(out, "{} | {}", line_str, line_text_removed.trim_end())?;

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    writeln!(out, "{:>padding$} {:->arrows$}", "|", "^")
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();

    (String::from(&string[start..]), start)
}
