use std::path::PathBuf;

use marknote::config::{ConfigFlags, load_config_flags, parse_flag_tokens};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".marknoterc");
    let content = r"
# comment
--verbose

--root notes

--tab-width=2
";
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.verbose);
    assert_eq!(flags.root, Some(PathBuf::from("notes")));
    assert_eq!(flags.tab_width, Some(2));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".marknoterc");
    let content = "--verbose\n--root file-notes\n--tab-width 8\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "marknote".to_string(),
        "--root".to_string(),
        "cli-notes".to_string(),
        "todo.md".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.verbose, "file flags should remain enabled");
    assert_eq!(
        effective.root,
        Some(PathBuf::from("cli-notes")),
        "cli should override root"
    );
    assert_eq!(
        effective.editor_settings().tab_width,
        8,
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_missing_config_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let flags = load_config_flags(&dir.path().join("absent")).unwrap();
    assert_eq!(flags, ConfigFlags::default());
}
