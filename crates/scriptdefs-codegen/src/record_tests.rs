use indoc::indoc;
use scriptdefs_core::{DataType, ScriptConstant, ScriptFunction, ScriptParam, Value, Vector3};

use crate::record::{FallbackSite, constant, data_type, function, param, param_list};

#[test]
fn data_type_reference() {
    assert_eq!(data_type(DataType::ItemProperty), "DataType.ItemProperty");
}

#[test]
fn int_constant() {
    let c = ScriptConstant::new(DataType::Int, "OBJECT_TYPE_CREATURE", 1);
    insta::assert_snapshot!(constant(&c).text, @r#"new ScriptConstant(DataType.Int, "OBJECT_TYPE_CREATURE", 1)"#);
}

#[test]
fn float_constant() {
    let c = ScriptConstant::new(DataType::Float, "DIRECTION_EAST", 0.0);
    insta::assert_snapshot!(constant(&c).text, @r#"new ScriptConstant(DataType.Float, "DIRECTION_EAST", 0.0f)"#);
}

#[test]
fn string_constant_is_escaped() {
    let c = ScriptConstant::new(DataType::String, "QUOTE", "say \"hi\"");
    insta::assert_snapshot!(constant(&c).text, @r#"new ScriptConstant(DataType.String, "QUOTE", "say \"hi\"")"#);
}

#[test]
fn alias_constant() {
    let c = ScriptConstant::new(DataType::Object, "OBJECT_INVALID", "OBJECT_INVALID");
    let out = constant(&c);
    assert_eq!(
        out.text,
        r#"new ScriptConstant(DataType.Object, "OBJECT_INVALID", -1)"#
    );
    assert!(out.fallbacks.is_empty());
}

#[test]
fn constant_fallback_is_reported() {
    let c = ScriptConstant::new(DataType::Effect, "EFFECT_X", 3);
    let out = constant(&c);
    assert_eq!(out.text, r#"new ScriptConstant(DataType.Effect, "EFFECT_X", 3)"#);
    assert_eq!(
        out.fallbacks,
        [FallbackSite {
            record: "EFFECT_X".to_string(),
            datatype: DataType::Effect,
            value: "3".to_string(),
        }]
    );
}

#[test]
fn param_with_default() {
    let p = ScriptParam::new(DataType::Int, "nNth").with_default(1);
    assert_eq!(
        param("GetNearestObject", &p).text,
        r#"new ScriptParam(DataType.Int, "nNth", 1)"#
    );
}

#[test]
fn param_without_default_has_no_trailing_comma() {
    let p = ScriptParam::new(DataType::Int, "nNth");
    assert_eq!(
        param("GetNearestObject", &p).text,
        r#"new ScriptParam(DataType.Int, "nNth")"#
    );
}

#[test]
fn param_alias_default() {
    let p = ScriptParam::new(DataType::Object, "oTarget").with_default("OBJECT_SELF");
    assert_eq!(
        param("GetNearestObject", &p).text,
        r#"new ScriptParam(DataType.Object, "oTarget", 0)"#
    );
}

#[test]
fn param_vector_default() {
    let p = ScriptParam::new(DataType::Vector, "vPos").with_default(Vector3::new(0.0, 0.0, 0.0));
    assert_eq!(
        param("Location", &p).text,
        r#"new ScriptParam(DataType.Vector, "vPos", new Vector3(0.0f, 0.0f, 0.0f))"#
    );
}

#[test]
fn param_fallback_names_function() {
    let p = ScriptParam::new(DataType::Talent, "tTalent").with_default(Value::Int(0));
    let out = param("ActionUseTalent", &p);
    assert_eq!(out.fallbacks[0].record, "ActionUseTalent.tTalent");
}

#[test]
fn param_list_keeps_order() {
    let f = ScriptFunction::new(DataType::Void, "F")
        .param(ScriptParam::new(DataType::Int, "b"))
        .param(ScriptParam::new(DataType::Int, "a"))
        .param(ScriptParam::new(DataType::Int, "c"));
    insta::assert_snapshot!(param_list(&f).text, @r#"new List<ScriptParam> { new ScriptParam(DataType.Int, "b"), new ScriptParam(DataType.Int, "a"), new ScriptParam(DataType.Int, "c") }"#);
}

#[test]
fn empty_param_list() {
    let f = ScriptFunction::new(DataType::Object, "GetFirstPC");
    assert_eq!(param_list(&f).text, "new List<ScriptParam>()");
}

#[test]
fn function_layout() {
    let f = ScriptFunction::new(DataType::Float, "GetDistanceBetween")
        .param(ScriptParam::new(DataType::Object, "oObjectA"))
        .param(ScriptParam::new(DataType::Object, "oObjectB").with_default("OBJECT_SELF"))
        .description("// Get the distance in metres")
        .raw("float GetDistanceBetween(object oObjectA, object oObjectB=OBJECT_SELF);");

    let expected = indoc! {r#"
        new ScriptFunction(
            DataType.Float,
            "GetDistanceBetween",
            new List<ScriptParam> { new ScriptParam(DataType.Object, "oObjectA"), new ScriptParam(DataType.Object, "oObjectB", 0) },
            @"// Get the distance in metres",
            @"float GetDistanceBetween(object oObjectA, object oObjectB=OBJECT_SELF);"
        )"#};
    assert_eq!(function(&f, "").text, expected);
}

#[test]
fn function_indent_applies_to_structural_lines_only() {
    let f = ScriptFunction::new(DataType::Void, "F")
        .description("// line one\n// line two")
        .raw("void F();");

    let out = function(&f, "    ").text;
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines[0], "    new ScriptFunction(");
    assert_eq!(lines[1], "        DataType.Void,");
    assert_eq!(lines[4], "        @\"// line one");
    assert_eq!(lines[5], "// line two\",");
    assert_eq!(lines[7], "    )");
}

#[test]
fn function_free_text_uses_verbatim_escaping() {
    let f = ScriptFunction::new(DataType::Void, "SpeakString")
        .description("// Say \"hello\"\r\n// Path: C:\\temp")
        .raw("void SpeakString(string sString);");

    let out = function(&f, "").text;
    assert!(out.contains("@\"// Say \"\"hello\"\"\r\n// Path: C:\\temp\","));
    assert!(!out.contains("\\\""));
    assert!(!out.contains("\\r\\n"));
}

#[test]
fn function_collects_param_fallbacks() {
    let f = ScriptFunction::new(DataType::Void, "F")
        .param(ScriptParam::new(DataType::Event, "e").with_default(1))
        .param(ScriptParam::new(DataType::Int, "n").with_default(2))
        .param(ScriptParam::new(DataType::Action, "a").with_default(3));

    let records: Vec<_> = function(&f, "")
        .fallbacks
        .into_iter()
        .map(|site| site.record)
        .collect();
    assert_eq!(records, ["F.e", "F.a"]);
}
