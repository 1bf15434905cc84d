use std::{env, io, process};

use crate::{
    assign::{self, Assigner},
    convert::{self, FromArg},
    help,
    registry::Registry,
    slot::SEPARATOR,
    spec::ArgSpec,
    tag, Error, Result, Target,
};

/// What `parse` does when parsing fails.
///
/// The default prints the error and the help text, then exits with status 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Terminate the process instead of returning the error.
    pub exit_on_failure: bool,
    /// Write the help text to the sink before handling the failure.
    pub print_help_on_failure: bool,
}

impl Default for ParseOptions {
    fn default() -> ParseOptions {
        ParseOptions { exit_on_failure: true, print_help_on_failure: true }
    }
}

impl ParseOptions {
    /// Return every failure to the caller without printing anything.
    pub fn propagate() -> ParseOptions {
        ParseOptions { exit_on_failure: false, print_help_on_failure: false }
    }

    pub fn exit_on_failure(mut self, yes: bool) -> ParseOptions {
        self.exit_on_failure = yes;
        self
    }

    pub fn print_help_on_failure(mut self, yes: bool) -> ParseOptions {
        self.print_help_on_failure = yes;
        self
    }
}

/// Addresses a declared argument by position or by canonical key name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgRef<'a> {
    Position(usize),
    Key(&'a str),
}

impl From<usize> for ArgRef<'_> {
    fn from(pos: usize) -> Self {
        ArgRef::Position(pos)
    }
}

impl<'a> From<&'a str> for ArgRef<'a> {
    fn from(name: &'a str) -> Self {
        ArgRef::Key(name)
    }
}

/// A parse session: declarations, the values parsed into them and whether
/// parsing already happened.
#[derive(Debug, Clone)]
pub struct Parser {
    registry: Registry,
    parsed: bool,
    sep: char,
}

impl Default for Parser {
    fn default() -> Parser {
        Parser::new()
    }
}

impl Parser {
    pub fn new() -> Parser {
        Parser::with_separator(SEPARATOR)
    }

    /// Uses `sep` instead of [`SEPARATOR`] to join multi-valued arguments.
    pub fn with_separator(sep: char) -> Parser {
        Parser { registry: Registry::new(), parsed: false, sep }
    }

    pub fn separator(&self) -> char {
        self.sep
    }

    pub fn add_positional(&mut self, spec: impl Into<ArgSpec>) -> usize {
        self.registry.add_positional(spec.into())
    }

    /// Registers a keyed argument written as `-x` or `--name`.
    ///
    /// Fails with [`Error::InvalidKey`] for malformed, reserved (`-h`,
    /// `--help`) or already registered keys, and for names containing `-`.
    pub fn add_keyed(&mut self, raw_key: &str, spec: impl Into<ArgSpec>) -> Result<()> {
        self.registry.add_keyed(raw_key, spec.into())?;
        Ok(())
    }

    pub fn key_exists(&self, name: &str) -> bool {
        self.registry.key_exists(name)
    }

    pub fn position_exists(&self, index: usize) -> bool {
        self.registry.position_exists(index)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    /// Forgets parsed values so the session can parse again. Unless
    /// `keep_specs` is set, the declarations are dropped as well.
    pub fn reset(&mut self, keep_specs: bool) {
        self.parsed = false;
        self.registry.reset(keep_specs);
    }

    /// Parses `args`, which must not include the program name.
    ///
    /// Diagnostics go to `sink`. Parsing twice without [`Parser::reset`]
    /// fails regardless of `options`.
    pub fn parse<I, S>(
        &mut self,
        args: I,
        options: ParseOptions,
        sink: &mut dyn io::Write,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.parsed {
            return Err(Error::generic("Arguments have already been parsed"));
        }
        let args = args.into_iter().map(Into::into).collect::<Vec<String>>();
        match self.parse_(args) {
            Ok(()) => {
                self.parsed = true;
                Ok(())
            }
            Err(err) => Err(self.fail(err, options, sink)),
        }
    }

    /// Parses `args` and returns any failure, printing nothing.
    pub fn try_parse<I, S>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parse(args, ParseOptions::propagate(), &mut io::sink())
    }

    /// Parses the process arguments, reporting to stderr.
    pub fn parse_env(&mut self, options: ParseOptions) -> Result<()> {
        let args = env::args_os()
            .skip(1)
            .map(|arg| {
                arg.into_string()
                    .map_err(|arg| Error::generic(format!("Invalid utf8 argument: {arg:?}")))
            })
            .collect::<Result<Vec<_>>>();
        match args {
            Ok(args) => self.parse(args, options, &mut io::stderr()),
            Err(err) => Err(self.fail(err, options, &mut io::stderr())),
        }
    }

    fn parse_(&mut self, args: Vec<String>) -> Result<()> {
        if tag::contains_help(args.as_slice()) {
            return Err(Error::HelpRequested);
        }
        tracing::debug!(tokens = args.len(), "parsing arguments");
        Assigner::new(args, &mut self.registry, self.sep).run()?;
        assign::finalize(&mut self.registry)
    }

    fn fail(&self, err: Error, options: ParseOptions, sink: &mut dyn io::Write) -> Error {
        tracing::debug!(%err, "parsing failed");
        // Diagnostics are best effort, a broken sink must not mask `err`.
        if options.exit_on_failure && !err.is_help() {
            let _ = writeln!(sink, "{err}");
        }
        if options.print_help_on_failure || err.is_help() {
            let _ = self.write_help(sink);
        }
        if options.exit_on_failure {
            let _ = sink.flush();
            process::exit(1);
        }
        err
    }

    /// The help text: positionals, then keyed arguments, each with its
    /// default.
    pub fn help(&self) -> String {
        help::render(&self.registry)
    }

    pub fn write_help(&self, sink: &mut dyn io::Write) -> io::Result<()> {
        sink.write_all(self.help().as_bytes())
    }

    pub fn lookup<'a>(&self, arg: impl Into<ArgRef<'a>>) -> Result<&ArgSpec> {
        if !self.parsed {
            return Err(Error::generic("Arguments have not been parsed yet"));
        }
        match arg.into() {
            ArgRef::Position(pos) => {
                self.registry.positional(pos).ok_or(Error::OutOfBounds(Target::Position(pos)))
            }
            ArgRef::Key(name) => self
                .registry
                .keyed(name)
                .ok_or_else(|| Error::OutOfBounds(Target::Key(name.to_string()))),
        }
    }

    /// The raw value of the positional at `index`.
    pub fn get(&self, index: usize) -> Result<&str> {
        self.lookup(index).map(ArgSpec::raw)
    }

    /// The raw value of the keyed argument `name` (without dashes).
    pub fn get_key(&self, name: &str) -> Result<&str> {
        self.lookup(name).map(ArgSpec::raw)
    }

    pub fn value<T: FromArg>(&self, index: usize) -> Result<T> {
        T::from_arg(self.get(index)?)
    }

    pub fn value_key<T: FromArg>(&self, name: &str) -> Result<T> {
        T::from_arg(self.get_key(name)?)
    }

    /// Splits the positional at `index` on `sep` and converts every piece.
    pub fn values<T: FromArg>(&self, index: usize, sep: char) -> Result<Vec<T>> {
        many(self.get(index)?, sep)
    }

    pub fn values_key<T: FromArg>(&self, name: &str, sep: char) -> Result<Vec<T>> {
        many(self.get_key(name)?, sep)
    }
}

fn many<T: FromArg>(raw: &str, sep: char) -> Result<Vec<T>> {
    let values = convert::convert_many(raw, sep, T::KIND)?;
    Ok(values.into_iter().map(T::from_value).collect())
}
