//! Verbosity-gated diagnostics for the command-line front end.
//!
//! Everything goes to stderr so stdout carries only results.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Debugging,
}

pub struct Logger {
    verbosity: Verbosity,
}

impl Logger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        Self::new(if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Debugging
        } else {
            Verbosity::Normal
        })
    }

    pub fn log(&self, message: &str) {
        if !matches!(self.verbosity, Verbosity::Quiet) {
            eprintln!("{}", message);
        }
    }

    pub fn log_debug(&self, message: &str) {
        if matches!(self.verbosity, Verbosity::Debugging) {
            eprintln!("{}", message);
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }
}
