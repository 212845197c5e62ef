//! The dynamically typed scalar value carried through parsing and evaluation.

use core::fmt;

use crate::{
    error::{Error, Result},
    syntax::string_literal::unescape_quoted,
};

/// The kind of a [`ScalarValue`].
///
/// Variants are declared from narrow to wide, so the derived ordering is the
/// promotion order used by the binary operators: the wider kind wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Invalid,
    Bool,
    Char,
    Short,
    Integer,
    Long,
    Float,
    Double,
    String,
}

impl Kind {
    /// Byte width of the kind's payload. Bool, string and invalid report 0.
    pub fn type_length(self) -> usize {
        match self {
            Kind::Invalid | Kind::Bool | Kind::String => 0,
            Kind::Char => 1,
            Kind::Short => 2,
            Kind::Integer => 4,
            Kind::Long => 8,
            Kind::Float => 4,
            Kind::Double => 8,
        }
    }

    /// Canonical keyword, as printed inside a cast.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Invalid => "invalid",
            Kind::Bool => "bool",
            Kind::Char => "char",
            Kind::Short => "short",
            Kind::Integer => "integer",
            Kind::Long => "long",
            Kind::Float => "float",
            Kind::Double => "double",
            Kind::String => "string",
        }
    }

    /// Resolve a cast keyword. Keywords are case-sensitive.
    pub fn from_name(name: &str) -> Option<Kind> {
        let kind = match name {
            "bool" => Kind::Bool,
            "char" | "byte" => Kind::Char,
            "short" | "word" => Kind::Short,
            "int" | "integer" | "dword" => Kind::Integer,
            "long" | "qword" => Kind::Long,
            "float" => Kind::Float,
            "double" => Kind::Double,
            "string" => Kind::String,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Kind::Char | Kind::Short | Kind::Integer | Kind::Long)
    }

    pub fn is_floating(self) -> bool {
        matches!(self, Kind::Float | Kind::Double)
    }

    /// Representable range of an integer kind.
    fn int_bounds(self) -> Option<(i64, i64)> {
        match self {
            Kind::Char => Some((i8::MIN as i64, i8::MAX as i64)),
            Kind::Short => Some((i16::MIN as i64, i16::MAX as i64)),
            Kind::Integer => Some((i32::MIN as i64, i32::MAX as i64)),
            Kind::Long => Some((i64::MIN, i64::MAX)),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically typed scalar.
///
/// Equality via `PartialEq` is structural: two values are equal only when
/// they have the same kind and payload. Language-level comparisons with
/// promotion live in [`crate::values::ops`].
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// Marker used while probing subtrees for constness.
    Invalid,
    Bool(bool),
    Char(i8),
    Short(i16),
    Integer(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
}

impl Default for ScalarValue {
    fn default() -> Self {
        ScalarValue::Invalid
    }
}

// Tokens accepted by `get_boolean` and by `set_string` on a bool value.
const TRUE_TOKENS: [&str; 5] = ["true", "t", "yes", "y", "1"];
const FALSE_TOKENS: [&str; 5] = ["false", "f", "no", "n", "0"];

fn parse_bool_token(text: &str) -> Option<bool> {
    let text = text.trim();
    if TRUE_TOKENS.iter().any(|t| text.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if FALSE_TOKENS.iter().any(|t| text.eq_ignore_ascii_case(t)) {
        Some(false)
    } else {
        None
    }
}

/// Outcome of parsing integer text.
enum IntText {
    Exact(i64),
    Overflow(i64),
    Malformed,
}

fn parse_int_text(text: &str) -> IntText {
    use core::num::IntErrorKind;

    match text.trim().parse::<i64>() {
        Ok(v) => IntText::Exact(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => IntText::Overflow(i64::MAX),
            IntErrorKind::NegOverflow => IntText::Overflow(i64::MIN),
            _ => IntText::Malformed,
        },
    }
}

/// Parse a decimal real number. Rejects the `inf`/`nan` spellings that
/// `f64::from_str` would otherwise accept.
pub(crate) fn parse_real(text: &str) -> Option<f64> {
    let text = text.trim();
    let looks_numeric = text.bytes().any(|b| b.is_ascii_digit())
        && text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !looks_numeric {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Clamp `v` into `[min, max]`; the flag is false when clamping happened.
fn clamp_i64(v: i64, (min, max): (i64, i64)) -> (i64, bool) {
    if v > max {
        (max, false)
    } else if v < min {
        (min, false)
    } else {
        (v, true)
    }
}

/// Truncate a float toward zero into an i64, saturating at the bounds.
/// NaN becomes 0 and reports failure.
fn truncate_f64(v: f64) -> (i64, bool) {
    if v.is_nan() {
        return (0, false);
    }
    let t = v.trunc();
    if t >= 9_223_372_036_854_775_808.0 {
        (i64::MAX, false)
    } else if t < -9_223_372_036_854_775_808.0 {
        (i64::MIN, false)
    } else {
        (t as i64, true)
    }
}

/// Narrow an f64 into an f32, saturating finite values at `f32::MAX`.
fn narrow_f64(v: f64) -> (f32, bool) {
    if v.is_finite() && v.abs() > f32::MAX as f64 {
        (f32::MAX.copysign(v as f32), false)
    } else {
        (v as f32, true)
    }
}

impl ScalarValue {
    /// The zero value of `kind`.
    pub fn new(kind: Kind) -> Self {
        match kind {
            Kind::Invalid => ScalarValue::Invalid,
            Kind::Bool => ScalarValue::Bool(false),
            Kind::Char => ScalarValue::Char(0),
            Kind::Short => ScalarValue::Short(0),
            Kind::Integer => ScalarValue::Integer(0),
            Kind::Long => ScalarValue::Long(0),
            Kind::Float => ScalarValue::Float(0.0),
            Kind::Double => ScalarValue::Double(0.0),
            Kind::String => ScalarValue::String(String::new()),
        }
    }

    /// Classify untyped text: integer, then long, then double, else string.
    pub fn from_auto_string(text: &str) -> Self {
        let mut value = ScalarValue::Invalid;
        value.set_auto_string(text);
        value
    }

    pub fn kind(&self) -> Kind {
        match self {
            ScalarValue::Invalid => Kind::Invalid,
            ScalarValue::Bool(_) => Kind::Bool,
            ScalarValue::Char(_) => Kind::Char,
            ScalarValue::Short(_) => Kind::Short,
            ScalarValue::Integer(_) => Kind::Integer,
            ScalarValue::Long(_) => Kind::Long,
            ScalarValue::Float(_) => Kind::Float,
            ScalarValue::Double(_) => Kind::Double,
            ScalarValue::String(_) => Kind::String,
        }
    }

    pub fn type_length(&self) -> usize {
        self.kind().type_length()
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, ScalarValue::Invalid)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, ScalarValue::Bool(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, ScalarValue::String(_))
    }

    pub fn is_integer_kind(&self) -> bool {
        self.kind().is_integer()
    }

    pub fn is_floating_kind(&self) -> bool {
        self.kind().is_floating()
    }

    pub fn is_numeric(&self) -> bool {
        self.is_integer_kind() || self.is_floating_kind()
    }

    /// Integer payload of bool and integer kinds.
    pub(crate) fn as_i64(&self) -> Option<i64> {
        match *self {
            ScalarValue::Bool(b) => Some(b as i64),
            ScalarValue::Char(v) => Some(v as i64),
            ScalarValue::Short(v) => Some(v as i64),
            ScalarValue::Integer(v) => Some(v as i64),
            ScalarValue::Long(v) => Some(v),
            _ => None,
        }
    }

    /// Numeric payload of bool, integer and floating kinds.
    pub(crate) fn as_f64(&self) -> Option<f64> {
        match *self {
            ScalarValue::Float(v) => Some(v as f64),
            ScalarValue::Double(v) => Some(v),
            _ => self.as_i64().map(|v| v as f64),
        }
    }

    /// Store an integer, keeping the current kind.
    ///
    /// Integer kinds saturate: an out-of-range input is clamped to the
    /// kind's max (positive overflow) or min (negative overflow) and the
    /// setter returns `false`. An invalid value becomes a long.
    pub fn set_integer(&mut self, v: i64) -> bool {
        match self {
            ScalarValue::Invalid => {
                *self = ScalarValue::Long(v);
                true
            }
            ScalarValue::Bool(b) => {
                *b = v != 0;
                true
            }
            ScalarValue::Char(_) | ScalarValue::Short(_) | ScalarValue::Integer(_) => {
                let kind = self.kind();
                let (clamped, exact) = clamp_i64(v, kind.int_bounds().unwrap_or((v, v)));
                *self = match kind {
                    Kind::Char => ScalarValue::Char(clamped as i8),
                    Kind::Short => ScalarValue::Short(clamped as i16),
                    _ => ScalarValue::Integer(clamped as i32),
                };
                exact
            }
            ScalarValue::Long(slot) => {
                *slot = v;
                true
            }
            ScalarValue::Float(slot) => {
                *slot = v as f32;
                true
            }
            ScalarValue::Double(slot) => {
                *slot = v as f64;
                true
            }
            ScalarValue::String(s) => {
                *s = v.to_string();
                true
            }
        }
    }

    /// Store a floating point number, keeping the current kind.
    ///
    /// Integer kinds truncate toward zero and then saturate like
    /// [`set_integer`](Self::set_integer). An invalid value becomes a double.
    pub fn set_double(&mut self, v: f64) -> bool {
        match self {
            ScalarValue::Invalid => {
                *self = ScalarValue::Double(v);
                true
            }
            ScalarValue::Bool(b) => {
                *b = v.trunc() != 0.0;
                true
            }
            ScalarValue::Char(_)
            | ScalarValue::Short(_)
            | ScalarValue::Integer(_)
            | ScalarValue::Long(_) => {
                let (truncated, exact) = truncate_f64(v);
                self.set_integer(truncated) && exact
            }
            ScalarValue::Float(slot) => {
                let (narrowed, exact) = narrow_f64(v);
                *slot = narrowed;
                exact
            }
            ScalarValue::Double(slot) => {
                *slot = v;
                true
            }
            ScalarValue::String(s) => {
                *s = format_double(v);
                true
            }
        }
    }

    /// Parse `text` as a literal of the current kind.
    ///
    /// Returns `false` and leaves the value untouched when the text is not a
    /// valid literal. Numeric text out of range saturates and returns `false`.
    pub fn set_string(&mut self, text: &str) -> bool {
        self.parse_into(text).unwrap_or(false)
    }

    /// `None` when the text is malformed, otherwise whether it was stored
    /// without saturation.
    fn parse_into(&mut self, text: &str) -> Option<bool> {
        match self {
            ScalarValue::Invalid | ScalarValue::String(_) => {
                *self = ScalarValue::String(text.to_string());
                Some(true)
            }
            ScalarValue::Bool(b) => {
                *b = parse_bool_token(text)?;
                Some(true)
            }
            ScalarValue::Char(_)
            | ScalarValue::Short(_)
            | ScalarValue::Integer(_)
            | ScalarValue::Long(_) => match parse_int_text(text) {
                IntText::Exact(v) => Some(self.set_integer(v)),
                IntText::Overflow(v) => {
                    self.set_integer(v);
                    Some(false)
                }
                IntText::Malformed => None,
            },
            ScalarValue::Float(_) | ScalarValue::Double(_) => {
                let v = parse_real(text)?;
                Some(self.set_double(v))
            }
        }
    }

    /// Store a double-quoted, backslash-escaped string literal as a string.
    pub fn set_string_quoted(&mut self, quoted: &str) -> bool {
        match unescape_quoted(quoted) {
            Some(text) => {
                *self = ScalarValue::String(text);
                true
            }
            None => false,
        }
    }

    /// Classify untyped external text and store it as an integer if it fits
    /// 4 bytes, else a long if it fits 8 bytes, else a double if it is a
    /// real number, else a string.
    pub fn set_auto_string(&mut self, text: &str) -> &mut Self {
        *self = match parse_int_text(text) {
            IntText::Exact(v) => match i32::try_from(v) {
                Ok(v) => ScalarValue::Integer(v),
                Err(_) => ScalarValue::Long(v),
            },
            IntText::Overflow(_) | IntText::Malformed => match parse_real(text) {
                Some(v) => ScalarValue::Double(v),
                None => ScalarValue::String(text.to_string()),
            },
        };
        self
    }

    /// Truth value. Numbers are true when nonzero; strings only convert when
    /// they are one of the recognised true/false tokens.
    pub fn get_boolean(&self) -> Result<bool> {
        match self {
            ScalarValue::Invalid => Err(Error::conversion(
                "Cannot convert an invalid value to bool.",
            )),
            ScalarValue::Bool(b) => Ok(*b),
            ScalarValue::Float(v) => Ok(*v != 0.0),
            ScalarValue::Double(v) => Ok(*v != 0.0),
            ScalarValue::String(s) => parse_bool_token(s).ok_or_else(|| {
                Error::conversion(format!("Cannot convert string {:?} to bool.", s))
            }),
            other => Ok(other.as_i64().is_some_and(|v| v != 0)),
        }
    }

    /// Value as a 4 byte integer, truncating and saturating.
    pub fn get_integer(&self) -> Result<i32> {
        let v = self.get_long()?;
        Ok(clamp_i64(v, (i32::MIN as i64, i32::MAX as i64)).0 as i32)
    }

    /// Value as an 8 byte integer. Floating values truncate toward zero;
    /// strings parse as integer or real literals.
    pub fn get_long(&self) -> Result<i64> {
        match self {
            ScalarValue::Float(v) => Ok(truncate_f64(*v as f64).0),
            ScalarValue::Double(v) => Ok(truncate_f64(*v).0),
            ScalarValue::String(s) => match parse_int_text(s) {
                IntText::Exact(v) | IntText::Overflow(v) => Ok(v),
                IntText::Malformed => parse_real(s)
                    .map(|v| truncate_f64(v).0)
                    .ok_or_else(|| {
                        Error::conversion(format!("Cannot convert string {:?} to a number.", s))
                    }),
            },
            other => other
                .as_i64()
                .ok_or_else(|| Error::conversion("Cannot convert an invalid value to a number.")),
        }
    }

    /// Value as a double. Strings parse as real literals.
    pub fn get_double(&self) -> Result<f64> {
        match self {
            ScalarValue::String(s) => parse_real(s).ok_or_else(|| {
                Error::conversion(format!("Cannot convert string {:?} to a number.", s))
            }),
            other => other
                .as_f64()
                .ok_or_else(|| Error::conversion("Cannot convert an invalid value to a number.")),
        }
    }

    /// Canonical rendering; numeric renderings parse back to the same value.
    pub fn get_string(&self) -> String {
        self.to_string()
    }

    /// Cast this value to `kind` in place.
    ///
    /// Returns `Ok(false)` when a numeric conversion saturated, and an error
    /// when the conversion is undefined (e.g. a string that is not a valid
    /// literal of the target kind). On error the value is unchanged.
    pub fn convert_type(&mut self, kind: Kind) -> Result<bool> {
        if self.kind() == kind && kind != Kind::Invalid {
            return Ok(true);
        }

        let mut target = ScalarValue::new(kind);
        let exact = match (&*self, kind) {
            (ScalarValue::Invalid, _) | (_, Kind::Invalid) => {
                return Err(Error::conversion(format!(
                    "Cannot convert {} to {}.",
                    self.kind(),
                    kind
                )));
            }
            (_, Kind::String) => {
                target = ScalarValue::String(self.get_string());
                true
            }
            (_, Kind::Bool) => {
                target = ScalarValue::Bool(self.get_boolean()?);
                true
            }
            (ScalarValue::String(s), _) => target.parse_into(s).ok_or_else(|| {
                Error::conversion(format!("Cannot convert string {:?} to {}.", s, kind))
            })?,
            (ScalarValue::Float(v), _) => target.set_double(*v as f64),
            (ScalarValue::Double(v), _) => target.set_double(*v),
            (other, _) => target.set_integer(other.as_i64().unwrap_or_default()),
        };

        *self = target;
        Ok(exact)
    }
}

/// Shortest rendering that parses back to the same double, without a
/// trailing `.0` for whole numbers.
pub(crate) fn format_double(v: f64) -> String {
    format!("{}", v)
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Invalid => f.write_str("invalid"),
            ScalarValue::Bool(b) => write!(f, "{}", b),
            ScalarValue::Char(v) => write!(f, "{}", v),
            ScalarValue::Short(v) => write!(f, "{}", v),
            ScalarValue::Integer(v) => write!(f, "{}", v),
            ScalarValue::Long(v) => write!(f, "{}", v),
            ScalarValue::Float(v) => write!(f, "{}", v),
            ScalarValue::Double(v) => f.write_str(&format_double(*v)),
            ScalarValue::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ScalarValue {
    fn from(v: bool) -> Self {
        ScalarValue::Bool(v)
    }
}

impl From<i8> for ScalarValue {
    fn from(v: i8) -> Self {
        ScalarValue::Char(v)
    }
}

impl From<i16> for ScalarValue {
    fn from(v: i16) -> Self {
        ScalarValue::Short(v)
    }
}

impl From<i32> for ScalarValue {
    fn from(v: i32) -> Self {
        ScalarValue::Integer(v)
    }
}

impl From<i64> for ScalarValue {
    fn from(v: i64) -> Self {
        ScalarValue::Long(v)
    }
}

impl From<f32> for ScalarValue {
    fn from(v: f32) -> Self {
        ScalarValue::Float(v)
    }
}

impl From<f64> for ScalarValue {
    fn from(v: f64) -> Self {
        ScalarValue::Double(v)
    }
}

impl From<&str> for ScalarValue {
    fn from(v: &str) -> Self {
        ScalarValue::String(v.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(v: String) -> Self {
        ScalarValue::String(v)
    }
}
