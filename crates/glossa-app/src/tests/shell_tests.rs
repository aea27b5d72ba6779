use std::io::Cursor;

use tempfile::tempdir;

use super::open_session;
use crate::commands::{Command, Status};
use crate::shell::{ShellInput, parse_line, run_shell};

#[test]
fn test_parse_line() {
    assert_eq!(parse_line("   "), ShellInput::Empty);
    assert_eq!(parse_line("quit"), ShellInput::Quit);
    assert_eq!(parse_line("help"), ShellInput::Help);
    assert_eq!(
        parse_line("search cat"),
        ShellInput::Run(Command::Search { word: "cat".into() })
    );
    assert_eq!(
        parse_line("insert ice cream  冰淇淋"),
        ShellInput::Run(Command::Insert {
            word: "ice".into(),
            translation: "cream  冰淇淋".into(),
        })
    );
    assert_eq!(
        parse_line("insert lonely"),
        ShellInput::Run(Command::Insert {
            word: "lonely".into(),
            translation: String::new(),
        })
    );
    assert_eq!(
        parse_line("list m"),
        ShellInput::Run(Command::List {
            letter: Some('m'),
            json: false,
        })
    );
    assert_eq!(parse_line("fly away"), ShellInput::Unknown("fly".into()));
}

#[test]
fn test_scripted_session() {
    let dir = tempdir().unwrap();
    let mut session = open_session(dir.path());

    let script = "insert cat 猫\ninsert car 车\ninsert cow 牛\nsearch car\ndelete car\nsearch car\nquit\nsearch cat\n";
    let mut out = Vec::new();
    let status = run_shell(&mut session, Cursor::new(script), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(status, Status::Ok);
    assert!(out.starts_with("0 words loaded."));
    assert!(out.contains("Word: car\nTranslation: 车\n"));
    assert!(out.contains("Word 'car' deleted!\n"));
    assert!(out.contains("Word not found!\n"));
    // nothing after quit runs
    assert!(!out.contains("Word: cat"));

    let c = std::fs::read_to_string(dir.path().join("c.txt")).unwrap();
    assert_eq!(c, "cat\n猫\ncow\n牛\n");
}

#[test]
fn test_unknown_command_keeps_going() {
    let dir = tempdir().unwrap();
    let mut session = open_session(dir.path());

    let mut out = Vec::new();
    run_shell(&mut session, Cursor::new("dance\ninsert sky 天空\n"), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Unknown command 'dance'"));
    assert!(out.contains("Word 'sky' inserted!"));
}

#[test]
fn test_shell_reports_unsaved() {
    let dir = tempdir().unwrap();
    let mut session = open_session(dir.path());
    std::fs::create_dir(dir.path().join("p.txt")).unwrap();

    let mut out = Vec::new();
    let status = run_shell(&mut session, Cursor::new("insert pen 笔\n"), &mut out).unwrap();

    assert_eq!(status, Status::Unsaved);
}
