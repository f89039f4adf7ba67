use std::fs;

use super::output::write_atomic;

#[test]
fn writes_utf8_without_bom() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ScriptDefs.cs");

    write_atomic(&path, "// café\n").unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes, "// café\n".as_bytes());
    assert!(!bytes.starts_with(&[0xEF, 0xBB, 0xBF]));
}

#[test]
fn replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ScriptDefs.cs");
    fs::write(&path, "old contents that are longer than the new ones").unwrap();

    write_atomic(&path, "new").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Common").join("Script").join("ScriptLib.cs");

    write_atomic(&path, "x").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "x");
}

#[test]
fn leaves_no_temp_files_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.cs");

    write_atomic(&path, "x").unwrap();

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, ["out.cs"]);
}
