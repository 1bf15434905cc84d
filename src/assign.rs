//! The parsing state machine: routes raw tokens into the registry, then
//! applies defaults and checks required arguments.
use crate::{registry::Registry, tag, Error, Result, Target};

macro_rules! format_err {
    ($($tt:tt)*) => {
        Error::generic(format!($($tt)*))
    };
}

macro_rules! bail {
    ($($tt:tt)*) => {
        return Err(format_err!($($tt)*))
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    ValueOrKey,
    ValueForKey(String),
}

pub(crate) struct Assigner<'a> {
    rargs: Vec<String>,
    registry: &'a mut Registry,
    sep: char,
    state: State,
    next_pos: usize,
}

impl<'a> Assigner<'a> {
    pub(crate) fn new(mut args: Vec<String>, registry: &'a mut Registry, sep: char) -> Self {
        args.reverse();
        Self { rargs: args, registry, sep, state: State::ValueOrKey, next_pos: 0 }
    }

    fn next(&mut self) -> Option<String> {
        self.rargs.pop()
    }

    /// Consumes every token. Help is expected to be intercepted beforehand.
    pub(crate) fn run(mut self) -> Result<()> {
        while let Some(arg) = self.next() {
            let state = std::mem::replace(&mut self.state, State::ValueOrKey);
            self.state = match (state, tag::key_name(&arg)) {
                (State::ValueOrKey, Some(name)) => {
                    if !self.registry.key_exists(name) {
                        return Err(Error::OutOfBounds(Target::Key(arg.clone())));
                    }
                    tracing::trace!(key = name, "expecting value");
                    State::ValueForKey(name.to_string())
                }
                (State::ValueOrKey, None) => {
                    self.route_positional(&arg)?;
                    State::ValueOrKey
                }
                (State::ValueForKey(key), None) => {
                    self.route_keyed(&key, &arg)?;
                    State::ValueOrKey
                }
                (State::ValueForKey(key), Some(_)) => {
                    bail!("The key '{key}' is followed by the key '{arg}' instead of a value")
                }
            };
        }
        if let State::ValueForKey(key) = &self.state {
            bail!("The key '{key}' is uninitialized");
        }
        Ok(())
    }

    fn route_positional(&mut self, value: &str) -> Result<()> {
        let pos = self.next_pos;
        let spec = match self.registry.positional_mut(pos) {
            Some(it) => it,
            None => return Err(Error::OutOfBounds(Target::Position(pos))),
        };
        tracing::trace!(pos, value, "positional");
        spec.append_or_set(value, self.sep);
        self.next_pos += 1;
        Ok(())
    }

    fn route_keyed(&mut self, key: &str, value: &str) -> Result<()> {
        let spec = match self.registry.keyed_mut(key) {
            Some(it) => it,
            None => return Err(Error::OutOfBounds(Target::Key(key.to_string()))),
        };
        tracing::trace!(key, value, "keyed");
        spec.append_or_set(value, self.sep);
        Ok(())
    }
}

/// Applies defaults, then fails on the first required argument still
/// without a value. Positionals are checked before keyed arguments.
pub(crate) fn finalize(registry: &mut Registry) -> Result<()> {
    for (pos, spec) in registry.positionals_mut().enumerate() {
        spec.apply_default();
        if spec.is_required() && !spec.is_satisfied() {
            bail!("Ordered argument {pos} is not given");
        }
    }
    for (key, spec) in registry.keyed_specs_mut() {
        spec.apply_default();
        if spec.is_required() && !spec.is_satisfied() {
            bail!("Keyword argument '{key}' is not given");
        }
    }
    Ok(())
}
