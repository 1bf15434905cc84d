use std::collections::HashMap;

use crate::{spec::ArgSpec, tag, Error, Result};

/// Declared arguments: positionals by index, keyed by canonical name.
///
/// Keyed specs are kept in registration order, which is the order help lists
/// them in.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    positionals: Vec<ArgSpec>,
    keyed: Vec<(String, ArgSpec)>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Returns the index of the new positional.
    pub fn add_positional(&mut self, spec: ArgSpec) -> usize {
        self.positionals.push(spec);
        self.positionals.len() - 1
    }

    /// Registers `raw_key` (`-x` or `--name`), returning its canonical name.
    pub fn add_keyed(&mut self, raw_key: &str, spec: ArgSpec) -> Result<&str> {
        let name = match tag::key_name(raw_key) {
            Some(name) if !self.key_exists(name) && is_valid_name(name) => name.to_string(),
            _ => return Err(Error::InvalidKey { key: raw_key.to_string() }),
        };
        let idx = self.keyed.len();
        self.index.insert(name.clone(), idx);
        self.keyed.push((name, spec));
        Ok(self.keyed[idx].0.as_str())
    }

    pub fn key_exists(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn position_exists(&self, index: usize) -> bool {
        index < self.positionals.len()
    }

    pub fn positional(&self, index: usize) -> Option<&ArgSpec> {
        self.positionals.get(index)
    }

    pub fn keyed(&self, name: &str) -> Option<&ArgSpec> {
        let idx = *self.index.get(name)?;
        Some(&self.keyed[idx].1)
    }

    pub(crate) fn positional_mut(&mut self, index: usize) -> Option<&mut ArgSpec> {
        self.positionals.get_mut(index)
    }

    pub(crate) fn keyed_mut(&mut self, name: &str) -> Option<&mut ArgSpec> {
        let idx = *self.index.get(name)?;
        Some(&mut self.keyed[idx].1)
    }

    pub fn positionals(&self) -> impl Iterator<Item = &ArgSpec> + '_ {
        self.positionals.iter()
    }

    /// `(canonical name, spec)` pairs in registration order.
    pub fn keyed_specs(&self) -> impl Iterator<Item = (&str, &ArgSpec)> + '_ {
        self.keyed.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub(crate) fn positionals_mut(&mut self) -> impl Iterator<Item = &mut ArgSpec> + '_ {
        self.positionals.iter_mut()
    }

    pub(crate) fn keyed_specs_mut(&mut self) -> impl Iterator<Item = (&str, &mut ArgSpec)> + '_ {
        self.keyed.iter_mut().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn positional_count(&self) -> usize {
        self.positionals.len()
    }

    pub fn keyed_count(&self) -> usize {
        self.keyed.len()
    }

    /// Clears every stored value. Unless `keep_specs` is set, the
    /// declarations are dropped too.
    pub fn reset(&mut self, keep_specs: bool) {
        if !keep_specs {
            self.positionals.clear();
            self.keyed.clear();
            self.index.clear();
            return;
        }
        self.positionals_mut().for_each(ArgSpec::clear);
        self.keyed_specs_mut().for_each(|(_, spec)| spec.clear());
    }
}

fn is_valid_name(name: &str) -> bool {
    name != "h" && name != "help" && !name.contains('-')
}
