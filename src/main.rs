use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};

use rxrev::logger::{Logger, Verbosity};
use rxrev::{Atom, ReverseSearcher, decompose, reverse_pattern};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("haystack").args(["text", "file"])))]
struct Args {
    /// Regular expression to reverse
    #[arg(value_name = "PATTERN")]
    pattern: String,

    /// Find the last match in TEXT instead of printing the reversed pattern
    #[arg(short = 't', long, value_name = "TEXT", conflicts_with = "file")]
    text: Option<String>,

    /// Find the last match in the contents of FILE ("-" reads stdin)
    #[arg(short = 'f', long, value_name = "FILE")]
    file: Option<String>,

    /// Print every non-overlapping match, last first
    #[arg(short = 'a', long, requires = "haystack")]
    all: bool,

    /// Trace how the pattern is decomposed
    #[arg(short = 'v', long)]
    verbose: bool,

    /// No notes on stderr
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let logger = Logger::from_flags(args.quiet, args.verbose);

    match run(&args, &logger) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::from(2)
        }
    }
}

/// Returns false when a search found nothing.
fn run(args: &Args, logger: &Logger) -> Result<bool> {
    if logger.verbosity() == Verbosity::Debugging {
        trace_pieces(&args.pattern, logger);
    }

    let haystack = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => read_haystack(path)?,
        (None, None) => {
            let reversed = reverse_pattern(&args.pattern)
                .with_context(|| format!("Cannot reverse {:?}", args.pattern))?;
            println!("{}", reversed);
            return Ok(true);
        }
    };

    let searcher = ReverseSearcher::new(&args.pattern)
        .with_context(|| format!("Cannot search for {:?}", args.pattern))?;
    logger.log_debug(&format!("reversed: {}", searcher.reversed_pattern()));

    let matches = if args.all {
        searcher.rfind_all(&haystack)?
    } else {
        searcher.find_last(&haystack)?.into_iter().collect()
    };
    for m in &matches {
        println!("{}..{}\t{}", m.start(), m.end(), m.as_str());
    }
    if matches.is_empty() {
        logger.log("No match.");
    }
    Ok(!matches.is_empty())
}

fn read_haystack(path: &str) -> Result<String> {
    if path == "-" {
        let mut contents = String::new();
        io::stdin()
            .read_to_string(&mut contents)
            .context("Failed to read stdin")?;
        return Ok(contents);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
}

/// Log one line per top-level piece. Decomposition errors are left for the
/// real run to report.
fn trace_pieces(pattern: &str, logger: &Logger) {
    let Ok(pieces) = decompose(pattern) else {
        return;
    };
    for piece in pieces {
        let kind = match piece.atom {
            Atom::Literal(_) => "literal",
            Atom::Escape(_) => "escape",
            Atom::Class(_) => "class",
            Atom::Group(_) => "group",
        };
        logger.log_debug(&format!(
            "{:>4}  {:<8} {}{}",
            piece.offset,
            kind,
            piece.atom.as_str(),
            piece.operator
        ));
    }
}
