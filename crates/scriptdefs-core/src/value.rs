//! Runtime values carried by constants and parameter defaults.

use std::fmt;

/// A three-component NWScript vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Value of a constant or parameter default.
///
/// Symbolic names (`OBJECT_SELF`, `TRUE`, ...) arrive as `String`; the
/// emitter decides whether a string is an alias or text.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(try_from = "RawValue")]
pub enum Value {
    Int(i64),
    Float(f64),
    String(String),
    Vector(Vector3),
}

/// Default string representation, used by the emitter's fallback path.
///
/// Floats use the shortest representation that round-trips; vectors use
/// NWScript's bracket syntax.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(v) => write!(f, "{v:?}"),
            Value::String(s) => f.write_str(s),
            Value::Vector(v) => write!(f, "[{:?}, {:?}, {:?}]", v.x, v.y, v.z),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vector3> for Value {
    fn from(v: Vector3) -> Self {
        Value::Vector(v)
    }
}

// ============================================================================
// Deserialization Layer
// ============================================================================

/// JSON cannot spell infinities or NaN, so they are written as
/// `{ "float": "inf" }`, `{ "float": "-inf" }` or `{ "float": "nan" }`.
#[derive(Debug, Clone, Copy, serde::Deserialize)]
enum SpecialFloat {
    #[serde(rename = "inf", alias = "+inf", alias = "infinity")]
    PositiveInfinity,
    #[serde(rename = "-inf", alias = "-infinity")]
    NegativeInfinity,
    #[serde(rename = "nan", alias = "NaN")]
    NaN,
}

/// Untagged JSON shape. Variant order matters: integers must be tried
/// before floats so that `5` stays an `Int`, and `Unsigned` catches
/// integers past `i64::MAX` before they decay into lossy floats.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
enum RawValue {
    Int(i64),
    Unsigned(u64),
    Float(f64),
    Special { float: SpecialFloat },
    Vector([f64; 3]),
    Text(String),
}

impl TryFrom<RawValue> for Value {
    type Error = String;

    fn try_from(raw: RawValue) -> Result<Self, Self::Error> {
        Ok(match raw {
            RawValue::Int(n) => Value::Int(n),
            RawValue::Unsigned(n) => return Err(format!("integer {n} is out of range")),
            RawValue::Float(v) => Value::Float(v),
            RawValue::Special { float } => Value::Float(match float {
                SpecialFloat::PositiveInfinity => f64::INFINITY,
                SpecialFloat::NegativeInfinity => f64::NEG_INFINITY,
                SpecialFloat::NaN => f64::NAN,
            }),
            RawValue::Vector([x, y, z]) => Value::Vector(Vector3::new(x, y, z)),
            RawValue::Text(s) => Value::String(s),
        })
    }
}
