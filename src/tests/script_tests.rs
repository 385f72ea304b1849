use super::*;

fn loader() -> ScriptLoader {
    ScriptLoader::new("smia").expect("loader")
}

#[test]
fn loading_a_smia_file_replaces_the_buffer_verbatim() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("disco.smia");
    let content = "mkdisk -size=10 -unit=M\r\n# comentario\n\nfdisk -size=5 ";
    std::fs::write(&path, content)?;

    let mut buf = ScriptBuffer::new();
    buf.replace("old".to_string());
    loader().load_from_file(&path, &mut buf)?;
    assert_eq!(buf.as_str(), content);
    Ok(())
}

#[test]
fn other_extensions_leave_the_buffer_alone() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("script.txt");
    std::fs::write(&path, "mkdisk")?;

    let mut buf = ScriptBuffer::new();
    buf.replace("previous".to_string());
    let err = loader().load_from_file(&path, &mut buf).unwrap_err();
    assert!(
        matches!(&err, ScriptLoadError::InvalidExtension { name, .. } if name == "script.txt"),
        "{}",
        err
    );
    assert_eq!(buf.as_str(), "previous");
    Ok(())
}

#[test]
fn extension_is_matched_on_the_file_name_only() {
    let l = loader();
    assert!(l.accepts(Path::new("/tmp/dir.smia/a.smia")));
    assert!(!l.accepts(Path::new("/tmp/dir.smia/a.txt")));
    assert!(!l.accepts(Path::new("a.smia.bak")));
    assert!(!l.accepts(Path::new("a.SMIA")));
}

#[test]
fn unreadable_file_leaves_the_buffer_alone() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("missing.smia");

    let mut buf = ScriptBuffer::new();
    buf.replace("keep".to_string());
    let err = loader().load_from_file(&path, &mut buf).unwrap_err();
    assert!(matches!(err, ScriptLoadError::Read { .. }), "{}", err);
    assert_eq!(buf.as_str(), "keep");
    Ok(())
}

#[test]
fn buffer_edits() {
    let mut buf = ScriptBuffer::new();
    for c in "mkdir".chars() {
        buf.insert_char(c);
    }
    buf.insert_newline();
    buf.insert_char('x');
    buf.backspace();
    assert_eq!(buf.as_str(), "mkdir\n");
    assert_eq!(buf.lines().collect::<Vec<_>>(), vec!["mkdir", ""]);
    buf.clear();
    assert!(buf.is_empty());
}
