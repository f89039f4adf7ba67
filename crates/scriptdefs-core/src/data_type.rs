use std::fmt;

/// NWScript type tag attached to constants, parameters and return values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum DataType {
    Void,
    Int,
    Float,
    String,
    Object,
    Vector,
    Location,
    Event,
    Effect,
    ItemProperty,
    Talent,
    Action,
    Struct,
}

impl DataType {
    pub const ALL: [DataType; 13] = [
        DataType::Void,
        DataType::Int,
        DataType::Float,
        DataType::String,
        DataType::Object,
        DataType::Vector,
        DataType::Location,
        DataType::Event,
        DataType::Effect,
        DataType::ItemProperty,
        DataType::Talent,
        DataType::Action,
        DataType::Struct,
    ];

    /// Variant name as it appears on the C# `DataType` enum.
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Void => "Void",
            DataType::Int => "Int",
            DataType::Float => "Float",
            DataType::String => "String",
            DataType::Object => "Object",
            DataType::Vector => "Vector",
            DataType::Location => "Location",
            DataType::Event => "Event",
            DataType::Effect => "Effect",
            DataType::ItemProperty => "ItemProperty",
            DataType::Talent => "Talent",
            DataType::Action => "Action",
            DataType::Struct => "Struct",
        }
    }

    /// Look up a type by name, ignoring case.
    ///
    /// Accepts the C# spelling (`ItemProperty`), the NWScript keyword
    /// (`itemproperty`) and the upper-case enum name (`ITEMPROPERTY`).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|dt| dt.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for DataType {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::from_name(&name).ok_or_else(|| format!("unknown data type `{name}`"))
    }
}
