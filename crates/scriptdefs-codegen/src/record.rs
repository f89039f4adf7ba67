//! Constructor expressions for constants, parameters and functions.

use scriptdefs_core::{DataType, ScriptConstant, ScriptFunction, ScriptParam, Value};

use crate::escape::{quoted, verbatim};
use crate::value::{self, Literal};

/// A value that went through the fallback rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallbackSite {
    /// `NAME` for constants, `Function.param` for defaults.
    pub record: String,
    pub datatype: DataType,
    pub value: String,
}

/// Rendered expression plus any fallback hits met on the way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub fallbacks: Vec<FallbackSite>,
}

impl Rendered {
    fn literal(
        &mut self,
        record: impl FnOnce() -> String,
        datatype: DataType,
        value: &Value,
    ) -> Literal {
        let lit = value::emit(datatype, value);
        if lit.is_fallback() {
            self.fallbacks.push(FallbackSite {
                record: record(),
                datatype,
                value: lit.text.clone(),
            });
        }
        lit
    }
}

/// `DataType.Int`
pub fn data_type(datatype: DataType) -> String {
    format!("DataType.{}", datatype.as_str())
}

/// `new ScriptConstant(DataType.Int, "NAME", 1)`
pub fn constant(c: &ScriptConstant) -> Rendered {
    let mut out = Rendered::default();
    let lit = out.literal(|| c.name.clone(), c.datatype, &c.value);
    out.text = format!(
        "new ScriptConstant({}, {}, {})",
        data_type(c.datatype),
        quoted(&c.name),
        lit
    );
    out
}

/// `new ScriptParam(DataType.Int, "nNth", 1)`; the default is omitted when absent.
pub fn param(function: &str, p: &ScriptParam) -> Rendered {
    let mut out = Rendered::default();
    let mut text = format!("new ScriptParam({}, {}", data_type(p.datatype), quoted(&p.name));
    if let Some(default) = &p.default {
        let lit = out.literal(|| format!("{function}.{}", p.name), p.datatype, default);
        text.push_str(", ");
        text.push_str(&lit.text);
    }
    text.push(')');
    out.text = text;
    out
}

/// `new List<ScriptParam> { ... }`, or `new List<ScriptParam>()` when empty.
pub fn param_list(f: &ScriptFunction) -> Rendered {
    if f.params.is_empty() {
        return Rendered {
            text: "new List<ScriptParam>()".to_string(),
            fallbacks: Vec::new(),
        };
    }

    let mut out = Rendered::default();
    let mut items = Vec::with_capacity(f.params.len());
    for p in &f.params {
        let rendered = param(&f.name, p);
        out.fallbacks.extend(rendered.fallbacks);
        items.push(rendered.text);
    }
    out.text = format!("new List<ScriptParam> {{ {} }}", items.join(", "));
    out
}

/// Multi-line `new ScriptFunction(...)` whose structural lines start at `indent`.
///
/// Description and raw signature are verbatim literals and keep their own
/// line breaks; only the surrounding lines are indented.
pub fn function(f: &ScriptFunction, indent: &str) -> Rendered {
    let params = param_list(f);
    let inner = format!("{indent}    ");
    let text = format!(
        "{indent}new ScriptFunction(\n\
         {inner}{},\n\
         {inner}{},\n\
         {inner}{},\n\
         {inner}{},\n\
         {inner}{}\n\
         {indent})",
        data_type(f.return_type),
        quoted(&f.name),
        params.text,
        verbatim(&f.description),
        verbatim(&f.raw),
    );
    Rendered {
        text,
        fallbacks: params.fallbacks,
    }
}
