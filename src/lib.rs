//! Positional and keyword command line arguments with typed retrieval.
//!
//! A [`Parser`] is filled with declarations first, then fed the raw argument
//! vector once, and finally queried for values:
//!
//! ```
//! use kwparse::{ArgSpec, Parser};
//!
//! let mut parser = Parser::new();
//! parser.add_positional(ArgSpec::new("input file"));
//! parser.add_keyed("--name", ArgSpec::new("who to greet").required(false).default("anon")).unwrap();
//! parser.add_keyed("-n", ArgSpec::new("repetitions").required(false).multi(true)).unwrap();
//!
//! parser.try_parse(["input.txt", "-n", "1", "-n", "2"]).unwrap();
//!
//! assert_eq!(parser.get(0).unwrap(), "input.txt");
//! assert_eq!(parser.get_key("name").unwrap(), "anon");
//! assert_eq!(parser.values_key::<u32>("n", ',').unwrap(), vec![1, 2]);
//! ```
//!
//! Keys are written `-x` (one character) or `--name` (two or more). `-h` and
//! `--help` are reserved: anywhere in the input they stop parsing and request
//! the help text.
//!
//! Values are stored as strings and converted on demand. Conversion is
//! permissive: text that is not a number reads as zero rather than failing.
use std::{fmt, process};

mod assign;
mod convert;
mod help;
mod parser;
mod registry;
mod slot;
mod spec;
mod tag;

pub use crate::{
    convert::{convert, convert_many, FromArg, Kind, Value},
    parser::{ArgRef, ParseOptions, Parser},
    registry::Registry,
    slot::{ValueSlot, SEPARATOR},
    spec::ArgSpec,
    tag::{contains_help, is_key_tag, key_name},
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A key rejected at registration time.
    #[error("The following key '{key}' is invalid")]
    InvalidKey { key: String },
    #[error("{0}")]
    OutOfBounds(Target),
    #[error("{0}")]
    Generic(String),
    /// `-h` or `--help` was found in the input.
    #[error("Help requested")]
    HelpRequested,
}

impl Error {
    pub fn is_help(&self) -> bool {
        matches!(self, Error::HelpRequested)
    }

    /// Prints the error to stderr and terminates the process with status 1.
    pub fn exit(self) -> ! {
        if !self.is_help() {
            eprintln!("{self}");
        }
        process::exit(1)
    }

    pub(crate) fn generic(msg: impl Into<String>) -> Error {
        Error::Generic(msg.into())
    }
}

/// What an [`Error::OutOfBounds`] failed to find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Position(usize),
    /// A key, as it was written (`--name`) during parsing or by canonical
    /// name during retrieval.
    Key(String),
    /// A character index into a stored value.
    Char { index: usize, value: String },
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Position(pos) => {
                write!(f, "The following position {pos} is not in the parser")
            }
            Target::Key(key) => write!(f, "The following key '{key}' does not exist in the parser"),
            Target::Char { index, value } => {
                write!(f, "Character {index} is out of range for value '{value}'")
            }
        }
    }
}
