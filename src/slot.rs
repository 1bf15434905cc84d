/// Separator joining the tokens of a multi-valued argument.
pub const SEPARATOR: char = ',';

/// Raw string storage for one declared argument.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValueSlot {
    raw: String,
    initialized: bool,
}

impl ValueSlot {
    pub fn new() -> ValueSlot {
        ValueSlot::default()
    }

    pub fn set(&mut self, value: &str) {
        self.raw.clear();
        self.raw.push_str(value);
        self.initialized = true;
    }

    /// Appends `sep` followed by `value`, or sets `value` if nothing was
    /// stored yet.
    pub fn append(&mut self, value: &str, sep: char) {
        if self.initialized {
            self.raw.push(sep);
            self.raw.push_str(value);
        } else {
            self.set(value);
        }
    }

    pub fn clear(&mut self) {
        self.raw.clear();
        self.initialized = false;
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Initialized with a non-empty value.
    pub fn is_present(&self) -> bool {
        self.initialized && !self.raw.is_empty()
    }
}
