use std::fs;

use super::library::{LibArgs, execute};
use crate::error::CliError;

#[test]
fn writes_library_document() {
    let dir = tempfile::tempdir().unwrap();
    let kotor = dir.path().join("k1");
    let tsl = dir.path().join("k2");
    fs::create_dir(&kotor).unwrap();
    fs::create_dir(&tsl).unwrap();
    fs::write(kotor.join("k_inc_utility.nss"), "int UT_Min(int a, int b);").unwrap();
    fs::write(tsl.join("k_inc_debug.nss"), "PrintString(\"x\");").unwrap();
    fs::write(tsl.join("A_LAST.NSS"), "").unwrap();
    let output = dir.path().join("ScriptLib.cs");

    let args = LibArgs {
        kotor,
        tsl,
        output: Some(output.clone()),
        namespace: None,
        class: Some("NwscriptLib".to_string()),
        header: false,
    };
    let report = execute(&args).unwrap();

    assert_eq!(report.entries("KOTOR_LIBRARY"), Some(1));
    assert_eq!(report.entries("TSL_LIBRARY"), Some(2));

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("public static class NwscriptLib"));
    assert!(text.contains(
        r#"{ "k_inc_utility", Encoding.UTF8.GetBytes(@"int UT_Min(int a, int b);") },"#
    ));
    assert!(text.contains(
        r#"{ "k_inc_debug", Encoding.UTF8.GetBytes(@"PrintString(""x"");") },"#
    ));
    assert!(text.find("\"a_last\"").unwrap() < text.find("\"k_inc_debug\"").unwrap());
}

#[test]
fn missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let args = LibArgs {
        kotor: dir.path().to_path_buf(),
        tsl: dir.path().join("nope"),
        output: Some(dir.path().join("out.cs")),
        namespace: None,
        class: None,
        header: true,
    };

    let err = execute(&args).unwrap_err();
    assert!(matches!(err, CliError::NotADirectory(_)));
    assert!(!dir.path().join("out.cs").exists());
}
