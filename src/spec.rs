use crate::slot::ValueSlot;

/// A declared argument, positional or keyed.
///
/// Arguments are required and single-valued unless configured otherwise:
///
/// ```
/// use kwparse::ArgSpec;
///
/// let jobs = ArgSpec::new("number of jobs").required(false).default("1");
/// assert_eq!(jobs.default_value(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgSpec {
    help: String,
    required: bool,
    multi: bool,
    default: String,
    slot: ValueSlot,
}

impl ArgSpec {
    pub fn new(help: impl Into<String>) -> ArgSpec {
        ArgSpec {
            help: help.into(),
            required: true,
            multi: false,
            default: String::new(),
            slot: ValueSlot::new(),
        }
    }

    pub fn required(mut self, yes: bool) -> ArgSpec {
        self.required = yes;
        self
    }

    /// Accumulate every supplied token instead of keeping the last one.
    pub fn multi(mut self, yes: bool) -> ArgSpec {
        self.multi = yes;
        self
    }

    pub fn default(mut self, value: impl Into<String>) -> ArgSpec {
        self.default = value.into();
        self
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_multi(&self) -> bool {
        self.multi
    }

    pub fn default_value(&self) -> &str {
        &self.default
    }

    pub fn slot(&self) -> &ValueSlot {
        &self.slot
    }

    pub fn raw(&self) -> &str {
        self.slot.raw()
    }

    /// A stored empty string does not count as a value.
    pub fn is_satisfied(&self) -> bool {
        self.slot.is_present()
    }

    pub(crate) fn append_or_set(&mut self, value: &str, sep: char) {
        if self.multi {
            self.slot.append(value, sep)
        } else {
            self.slot.set(value)
        }
    }

    /// Stores the default unless a value was supplied. The default replaces
    /// any empty tokens collected so far.
    pub(crate) fn apply_default(&mut self) {
        if self.is_satisfied() {
            return;
        }
        let default = self.default.clone();
        self.slot.set(&default);
    }

    pub(crate) fn clear(&mut self) {
        self.slot.clear()
    }
}

impl From<&str> for ArgSpec {
    fn from(help: &str) -> ArgSpec {
        ArgSpec::new(help)
    }
}
