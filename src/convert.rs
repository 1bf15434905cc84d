//! On-demand conversion of stored strings.
//!
//! Conversion never rejects malformed numbers: like C's `strtol` family it
//! reads the longest numeric prefix and yields zero when there is none. The
//! only failure is reading a boolean out of an empty string.
use crate::{Error, Result, Target};

/// The closed set of conversion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Str,
    Int,
    Unsigned,
    Float,
    Bool,
}

/// A converted value, tagged by its [`Kind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
}

pub fn convert(raw: &str, kind: Kind) -> Result<Value> {
    let value = match kind {
        Kind::Str => Value::Str(raw.to_string()),
        Kind::Int => Value::Int(parse_int(raw)),
        Kind::Unsigned => Value::Unsigned(parse_unsigned(raw)),
        Kind::Float => Value::Float(parse_float(raw)),
        Kind::Bool => match raw.chars().next() {
            Some(c) => Value::Bool(c == 't' || c == 'T'),
            None => {
                return Err(Error::OutOfBounds(Target::Char { index: 0, value: raw.to_string() }))
            }
        },
    };
    Ok(value)
}

/// Splits on `sep` and converts every piece. Always yields at least one
/// element; an empty string becomes `[""]`.
pub fn convert_many(raw: &str, sep: char, kind: Kind) -> Result<Vec<Value>> {
    raw.split(sep).map(|it| convert(it, kind)).collect()
}

/// Types an argument can be read as.
///
/// Implemented for `String`, `bool`, the primitive integers and floats.
/// Integers narrower than 64 bits saturate.
pub trait FromArg: Sized + sealed::Sealed {
    const KIND: Kind;

    fn from_value(value: Value) -> Self;

    fn from_arg(raw: &str) -> Result<Self> {
        convert(raw, Self::KIND).map(Self::from_value)
    }
}

mod sealed {
    pub trait Sealed {}
}

impl Value {
    fn into_string(self) -> String {
        match self {
            Value::Str(it) => it,
            Value::Int(it) => it.to_string(),
            Value::Unsigned(it) => it.to_string(),
            Value::Float(it) => it.to_string(),
            Value::Bool(it) => it.to_string(),
        }
    }

    fn as_i64(&self) -> i64 {
        match *self {
            Value::Str(ref it) => parse_int(it),
            Value::Int(it) => it,
            Value::Unsigned(it) => i64::try_from(it).unwrap_or(i64::MAX),
            Value::Float(it) => it as i64,
            Value::Bool(it) => it as i64,
        }
    }

    fn as_u64(&self) -> u64 {
        match *self {
            Value::Str(ref it) => parse_unsigned(it),
            Value::Int(it) => it as u64,
            Value::Unsigned(it) => it,
            Value::Float(it) => it as u64,
            Value::Bool(it) => it as u64,
        }
    }

    fn as_f64(&self) -> f64 {
        match *self {
            Value::Str(ref it) => parse_float(it),
            Value::Int(it) => it as f64,
            Value::Unsigned(it) => it as f64,
            Value::Float(it) => it,
            Value::Bool(it) => it as u8 as f64,
        }
    }

    fn as_bool(&self) -> bool {
        match *self {
            Value::Str(ref it) => it.starts_with(['t', 'T']),
            Value::Int(it) => it != 0,
            Value::Unsigned(it) => it != 0,
            Value::Float(it) => it != 0.0,
            Value::Bool(it) => it,
        }
    }
}

impl sealed::Sealed for String {}
impl FromArg for String {
    const KIND: Kind = Kind::Str;
    fn from_value(value: Value) -> Self {
        value.into_string()
    }
}

impl sealed::Sealed for bool {}
impl FromArg for bool {
    const KIND: Kind = Kind::Bool;
    fn from_value(value: Value) -> Self {
        value.as_bool()
    }
}

macro_rules! from_arg_signed {
    ($($ty:ident)*) => {$(
        impl sealed::Sealed for $ty {}
        impl FromArg for $ty {
            const KIND: Kind = Kind::Int;
            fn from_value(value: Value) -> Self {
                let it = value.as_i64();
                <$ty>::try_from(it).unwrap_or(if it < 0 { <$ty>::MIN } else { <$ty>::MAX })
            }
        }
    )*};
}

macro_rules! from_arg_unsigned {
    ($($ty:ident)*) => {$(
        impl sealed::Sealed for $ty {}
        impl FromArg for $ty {
            const KIND: Kind = Kind::Unsigned;
            fn from_value(value: Value) -> Self {
                <$ty>::try_from(value.as_u64()).unwrap_or(<$ty>::MAX)
            }
        }
    )*};
}

from_arg_signed!(i8 i16 i32 i64 isize);
from_arg_unsigned!(u8 u16 u32 u64 usize);

impl sealed::Sealed for f64 {}
impl FromArg for f64 {
    const KIND: Kind = Kind::Float;
    fn from_value(value: Value) -> Self {
        value.as_f64()
    }
}

impl sealed::Sealed for f32 {}
impl FromArg for f32 {
    const KIND: Kind = Kind::Float;
    fn from_value(value: Value) -> Self {
        value.as_f64() as f32
    }
}

/// Leading whitespace and an optional sign, as `strtol` accepts them.
fn split_sign(s: &str) -> (bool, &str) {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

/// Magnitude of the leading digits, `None` on overflow.
fn leading_digits(s: &str) -> Option<u64> {
    s.bytes().take_while(u8::is_ascii_digit).try_fold(0u64, |acc, b| {
        acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
    })
}

fn parse_int(s: &str) -> i64 {
    let (neg, digits) = split_sign(s);
    match (neg, leading_digits(digits)) {
        (false, Some(mag)) => i64::try_from(mag).unwrap_or(i64::MAX),
        (false, None) => i64::MAX,
        (true, Some(mag)) if mag <= i64::MIN.unsigned_abs() => (mag as i64).wrapping_neg(),
        (true, _) => i64::MIN,
    }
}

fn parse_unsigned(s: &str) -> u64 {
    let (neg, digits) = split_sign(s);
    match leading_digits(digits) {
        Some(mag) if neg => mag.wrapping_neg(),
        Some(mag) => mag,
        None => u64::MAX,
    }
}

fn parse_float(s: &str) -> f64 {
    let (neg, rest) = split_sign(s);
    let magnitude = match float_prefix(rest) {
        Some(it) if it.starts_with(['i', 'I']) => f64::INFINITY,
        Some(it) if it.starts_with(['n', 'N']) => f64::NAN,
        Some(it) => it.parse::<f64>().unwrap_or(0.0),
        None => 0.0,
    };
    if neg {
        -magnitude
    } else {
        magnitude
    }
}

/// The longest prefix of `s` that reads as an unsigned decimal float.
fn float_prefix(s: &str) -> Option<&str> {
    for word in ["infinity", "inf", "nan"] {
        if let Some(prefix) = s.get(..word.len()).filter(|it| it.eq_ignore_ascii_case(word)) {
            return Some(prefix);
        }
    }

    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..].iter().take_while(|it| it.is_ascii_digit()).count()
    };

    let int_len = digits_from(0);
    let mut end = int_len;
    let mut frac_len = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_len = digits_from(end + 1);
        end += 1 + frac_len;
    }
    if int_len + frac_len == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_len = digits_from(exp);
        if exp_len > 0 {
            end = exp + exp_len;
        }
    }
    Some(&s[..end])
}
