use crate::library::{decode, entry};

#[test]
fn simple_entry() {
    insta::assert_snapshot!(
        entry("a.nss", b"void main(){}"),
        @r#"{ "a.nss", Encoding.UTF8.GetBytes(@"void main(){}") }"#
    );
}

#[test]
fn quotes_are_doubled() {
    let out = entry("k_inc_debug.nss", br#"PrintString("debug: " + s);"#);
    assert_eq!(
        out,
        r#"{ "k_inc_debug.nss", Encoding.UTF8.GetBytes(@"PrintString(""debug: "" + s);") }"#
    );
}

#[test]
fn line_breaks_and_backslashes_pass_through() {
    let out = entry("x.nss", b"// path\\to\r\nint i;\n");
    assert_eq!(
        out,
        "{ \"x.nss\", Encoding.UTF8.GetBytes(@\"// path\\to\r\nint i;\n\") }"
    );
}

#[test]
fn invalid_utf8_is_replaced() {
    assert_eq!(decode(b"ok \xff end"), "ok \u{FFFD} end");

    let out = entry("bad.nss", b"a\xc3b");
    assert!(out.contains("@\"a\u{FFFD}b\""), "{out}");
}
