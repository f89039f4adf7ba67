//! Typed value to C# literal conversion.
//!
//! Rules, first match wins:
//! 1. String matching an alias ([`ALIASES`]) becomes its integer, whatever the type
//! 2. Any other string becomes a quoted literal
//! 3. `Int` + integer: decimal as-is
//! 4. `Float` + float: infinities/NaN map to `double.*`, otherwise numeral + `f`
//! 5. `String` + non-string: stringified, then quoted
//! 6. `Vector` + vector: `new Vector3(xf, yf, zf)`
//! 7. Anything else: the value's `Display` form, flagged as a fallback
//!
//! Finite floats beyond single-precision range have no valid `f` literal and
//! take rule 7.

use std::fmt;

use scriptdefs_core::{DataType, Value, Vector3};

use crate::escape::quoted;

/// Symbolic names the engine headers use as numeric defaults.
pub const ALIASES: &[(&str, i64)] = &[
    ("OBJECT_SELF", 0),
    ("OBJECT_INVALID", -1),
    ("TRUE", 1),
    ("FALSE", 0),
];

/// Largest magnitude a C# `float` literal accepts.
const FLOAT_MAX: f64 = f32::MAX as f64;

/// Resolve a symbolic alias to its integer value.
pub fn alias(name: &str) -> Option<i64> {
    ALIASES
        .iter()
        .find_map(|&(alias, value)| (alias == name).then_some(value))
}

/// Which rule produced a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralKind {
    Alias,
    Text,
    Int,
    Float,
    SpecialFloat,
    Vector,
    Fallback,
}

/// A rendered C# literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Literal {
    pub text: String,
    pub kind: LiteralKind,
}

impl Literal {
    fn new(kind: LiteralKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.kind == LiteralKind::Fallback
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Render `value` as a C# literal for a slot declared as `datatype`.
pub fn emit(datatype: DataType, value: &Value) -> Literal {
    if let Value::String(s) = value {
        return match alias(s) {
            Some(n) => Literal::new(LiteralKind::Alias, n.to_string()),
            None => Literal::new(LiteralKind::Text, quoted(s)),
        };
    }

    match (datatype, value) {
        (DataType::Int, Value::Int(n)) => Literal::new(LiteralKind::Int, n.to_string()),
        (DataType::Float, Value::Float(v)) if fits_float(*v) => double_literal(*v),
        (DataType::String, other) => Literal::new(LiteralKind::Text, quoted(&other.to_string())),
        (DataType::Vector, Value::Vector(v)) if [v.x, v.y, v.z].into_iter().all(fits_float) => {
            Literal::new(LiteralKind::Vector, vector_literal(v))
        }
        (_, other) => Literal::new(LiteralKind::Fallback, other.to_string()),
    }
}

/// Shortest decimal numeral that round-trips `v`, always with a `.` or exponent.
///
/// Formatting never consults the locale.
pub fn float_numeral(v: f64) -> String {
    format!("{v:?}")
}

/// Single-precision C# literal (`1.5f`); non-finite values use `float.*`.
pub fn float_literal(v: f64) -> String {
    match special_float(v) {
        Some(name) => format!("float.{name}"),
        None => format!("{}f", float_numeral(v)),
    }
}

fn double_literal(v: f64) -> Literal {
    match special_float(v) {
        Some(name) => Literal::new(LiteralKind::SpecialFloat, format!("double.{name}")),
        None => Literal::new(LiteralKind::Float, format!("{}f", float_numeral(v))),
    }
}

/// Non-finite values always fit: they render as named constants.
fn fits_float(v: f64) -> bool {
    !v.is_finite() || v.abs() <= FLOAT_MAX
}

fn special_float(v: f64) -> Option<&'static str> {
    if v.is_nan() {
        Some("NaN")
    } else if v == f64::INFINITY {
        Some("PositiveInfinity")
    } else if v == f64::NEG_INFINITY {
        Some("NegativeInfinity")
    } else {
        None
    }
}

fn vector_literal(v: &Vector3) -> String {
    format!(
        "new Vector3({}, {}, {})",
        float_literal(v.x),
        float_literal(v.y),
        float_literal(v.z)
    )
}
