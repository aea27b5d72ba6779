use tempfile::tempdir;

use super::open_session;
use crate::commands::{Command, Status, execute};
use crate::session::Session;

fn run(session: &mut Session, command: Command) -> (Status, String) {
    let mut out = Vec::new();
    let status = execute(session, command, &mut out).unwrap();
    (status, String::from_utf8(out).unwrap())
}

fn insert(word: &str, translation: &str) -> Command {
    Command::Insert {
        word: word.to_string(),
        translation: translation.to_string(),
    }
}

#[test]
fn test_insert_search_delete_messages() {
    let dir = tempdir().unwrap();
    let mut session = open_session(dir.path());

    let (status, out) = run(&mut session, insert("car", "车"));
    assert_eq!(status, Status::Ok);
    assert_eq!(out, "Word 'car' inserted!\n");

    let (status, out) = run(&mut session, Command::Search { word: "car".into() });
    assert_eq!(status, Status::Ok);
    assert_eq!(out, "Word: car\nTranslation: 车\n");

    let (status, out) = run(&mut session, Command::Delete { word: "car".into() });
    assert_eq!(status, Status::Ok);
    assert_eq!(out, "Word 'car' deleted!\n");

    let (status, out) = run(&mut session, Command::Search { word: "car".into() });
    assert_eq!(status, Status::Rejected);
    assert_eq!(out, "Word not found!\n");
}

#[test]
fn test_rejections_map_to_status() {
    let dir = tempdir().unwrap();
    let mut session = open_session(dir.path());
    run(&mut session, insert("bee", "蜜蜂"));

    let (status, out) = run(&mut session, insert("bee", "again"));
    assert_eq!(status, Status::Rejected);
    assert_eq!(out, "Word 'bee' already exists.\n");

    let (status, out) = run(&mut session, insert("bee", ""));
    assert_eq!(status, Status::Rejected);
    assert_eq!(out, "Please enter both word and translation.\n");

    let (status, out) = run(&mut session, Command::Delete { word: "zzz".into() });
    assert_eq!(status, Status::Rejected);
    assert_eq!(out, "Word not found!\n");
}

#[test]
fn test_unsaved_mutation_is_reported() {
    let dir = tempdir().unwrap();
    let mut session = open_session(dir.path());
    std::fs::create_dir(dir.path().join("d.txt")).unwrap();

    let (status, out) = run(&mut session, insert("dog", "狗"));

    assert_eq!(status, Status::Unsaved);
    assert!(out.starts_with("Word 'dog' inserted!\n"));
    assert!(out.contains("Some data may not have been saved"));
}

#[test]
fn test_list_plain_and_filtered() {
    let dir = tempdir().unwrap();
    let mut session = open_session(dir.path());
    let words = [("moon", "月亮"), ("apple", "苹果"), ("mango", "芒果"), ("Zeta", "泽塔")];
    for (word, translation) in words {
        run(&mut session, insert(word, translation));
    }

    let (_, out) = run(&mut session, Command::List { letter: None, json: false });
    assert_eq!(out, "Zeta\t泽塔\napple\t苹果\nmango\t芒果\nmoon\t月亮\n");

    let (_, out) = run(&mut session, Command::List { letter: Some('m'), json: false });
    assert_eq!(out, "mango\t芒果\nmoon\t月亮\n");
}

#[test]
fn test_list_json() {
    let dir = tempdir().unwrap();
    let mut session = open_session(dir.path());
    run(&mut session, insert("tea", "茶"));

    let (_, out) = run(&mut session, Command::List { letter: None, json: true });
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(
        parsed,
        serde_json::json!([{ "word": "tea", "translation": "茶" }])
    );
}

#[test]
fn test_stats() {
    let dir = tempdir().unwrap();
    let mut session = open_session(dir.path());
    for word in ["a", "b", "c", "d"] {
        run(&mut session, insert(word, "x"));
    }

    let (status, out) = run(&mut session, Command::Stats);
    assert_eq!(status, Status::Ok);
    assert!(out.contains("Entries: 4\n"));
    assert!(out.contains("Height: 3\n"));
}

#[test]
fn test_stats_reports_shards_with_invalid_utf8() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("b.txt"), b"bee\n\xff\n").unwrap();
    let mut session = open_session(dir.path());

    let (status, out) = run(&mut session, Command::Stats);
    assert_eq!(status, Status::Ok);
    assert!(out.contains("Entries: 1\n"));
    assert!(out.contains("Shards with invalid UTF-8: 1\n"));
}

#[test]
fn test_startup_failure_has_its_own_exit_code() {
    let codes = [Status::Ok, Status::Rejected, Status::Unsaved, Status::Failed].map(|s| s as u8);
    assert_eq!(codes, [0, 1, 2, 3]);
    assert!(Status::Failed > Status::Unsaved);
}
