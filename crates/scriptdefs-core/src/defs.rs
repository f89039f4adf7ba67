//! Constant and function tables for both game variants.

use crate::{DataType, Result, Value};

/// Game variant a table belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Game {
    Kotor,
    Tsl,
}

impl Game {
    pub const ALL: [Game; 2] = [Game::Kotor, Game::Tsl];

    /// Prefix used for generated container names (`KOTOR_CONSTANTS`).
    pub fn prefix(self) -> &'static str {
        match self {
            Game::Kotor => "KOTOR",
            Game::Tsl => "TSL",
        }
    }

    /// Human-readable title used in generated doc comments.
    pub fn title(self) -> &'static str {
        match self {
            Game::Kotor => "KOTOR (Knights of the Old Republic)",
            Game::Tsl => "TSL (The Sith Lords)",
        }
    }
}

/// A named script constant, e.g. `int TRUE = 1;`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ScriptConstant {
    #[serde(rename = "type", alias = "datatype")]
    pub datatype: DataType,
    pub name: String,
    pub value: Value,
}

impl ScriptConstant {
    pub fn new(datatype: DataType, name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            datatype,
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A function parameter with an optional default value.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ScriptParam {
    #[serde(rename = "type", alias = "datatype")]
    pub datatype: DataType,
    pub name: String,
    #[serde(default)]
    pub default: Option<Value>,
}

impl ScriptParam {
    pub fn new(datatype: DataType, name: impl Into<String>) -> Self {
        Self {
            datatype,
            name: name.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// An engine function declaration from `nwscript.nss`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ScriptFunction {
    #[serde(alias = "returntype")]
    pub return_type: DataType,
    pub name: String,
    #[serde(default)]
    pub params: Vec<ScriptParam>,
    /// Doc comment block preceding the declaration.
    #[serde(default)]
    pub description: String,
    /// Declaration text as written in the source.
    #[serde(default)]
    pub raw: String,
}

impl ScriptFunction {
    pub fn new(return_type: DataType, name: impl Into<String>) -> Self {
        Self {
            return_type,
            name: name.into(),
            params: Vec::new(),
            description: String::new(),
            raw: String::new(),
        }
    }

    pub fn param(mut self, param: ScriptParam) -> Self {
        self.params.push(param);
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    pub fn raw(mut self, text: impl Into<String>) -> Self {
        self.raw = text.into();
        self
    }
}

/// Constants and functions of one game variant, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct GameDefs {
    #[serde(default)]
    pub constants: Vec<ScriptConstant>,
    #[serde(default)]
    pub functions: Vec<ScriptFunction>,
}

/// Definitions for both game variants.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct ScriptDefs {
    #[serde(default, alias = "k1")]
    pub kotor: GameDefs,
    #[serde(default, alias = "k2")]
    pub tsl: GameDefs,
}

impl ScriptDefs {
    /// Parse a definitions document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn game(&self, game: Game) -> &GameDefs {
        match game {
            Game::Kotor => &self.kotor,
            Game::Tsl => &self.tsl,
        }
    }
}
