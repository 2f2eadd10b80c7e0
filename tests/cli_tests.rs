//! Integration tests for the sealnote CLI surface

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{sealnote_cmd, write_config, write_config_with_key};

fn add_note(dir: &std::path::Path, words: &[&str]) {
    sealnote_cmd(dir)
        .args(words)
        .assert()
        .success()
        .stdout(predicate::str::contains("Note saved!"));
}

#[test]
fn test_list_with_no_notes() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path());

    sealnote_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("You have no notes!"));
}

#[test]
fn test_add_then_list_round_trip() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path());

    add_note(temp.path(), &["here", "is", "my", "note"]);

    sealnote_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("here is my note (1)"));
}

#[test]
fn test_stored_note_is_encrypted_on_disk() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path());

    add_note(temp.path(), &["top", "secret", "content"]);

    let db = rusqlite::Connection::open(temp.path().join("notes.db")).unwrap();
    let stored: String = db
        .query_row("SELECT note FROM notes WHERE id = 1", [], |row| row.get(0))
        .unwrap();
    assert!(!stored.contains("secret"));
}

#[test]
fn test_list_newest_first_with_count() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path());

    add_note(temp.path(), &["first"]);
    add_note(temp.path(), &["second"]);
    add_note(temp.path(), &["third"]);

    let output = sealnote_cmd(temp.path()).args(["-l", "2"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("third (3)"));
    assert!(lines[1].contains("second (2)"));
}

#[test]
fn test_list_count_fallback() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path());

    for i in 0..7 {
        add_note(temp.path(), &["note", &i.to_string()]);
    }

    // -l 0 and -l abc both behave like -l 5
    for bad_count in ["0", "abc"] {
        let output = sealnote_cmd(temp.path())
            .args(["-l", bad_count])
            .output()
            .unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert_eq!(stdout.lines().count(), 5, "-l {} must list 5 notes", bad_count);
    }
}

#[test]
fn test_bare_list_flag_defaults_to_five() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path());

    for i in 0..6 {
        add_note(temp.path(), &["note", &i.to_string()]);
    }

    let output = sealnote_cmd(temp.path()).arg("-l").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 5);
}

#[test]
fn test_delete_notes() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path());

    add_note(temp.path(), &["keep", "me"]);
    add_note(temp.path(), &["delete", "me"]);

    sealnote_cmd(temp.path())
        .args(["-d", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes [2] deleted"));

    sealnote_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("keep me (1)"))
        .stdout(predicate::str::contains("delete me").not());
}

#[test]
fn test_delete_is_all_or_nothing() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path());

    add_note(temp.path(), &["survivor"]);

    sealnote_cmd(temp.path())
        .args(["-d", "1", "abc"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("only numbers are allowed"));

    // The valid id 1 must not have been deleted
    sealnote_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("survivor (1)"));
}

#[test]
fn test_delete_without_ids_fails() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path());

    sealnote_cmd(temp.path())
        .arg("-d")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No note ids given"));
}

#[test]
fn test_delete_nonexistent_id_succeeds() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path());

    sealnote_cmd(temp.path())
        .args(["-d", "999999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("999999"));
}

#[test]
fn test_help_exits_zero() {
    let temp = TempDir::new().unwrap();

    // No config needed for help
    sealnote_cmd(temp.path())
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("-l"))
        .stdout(predicate::str::contains("-d"));
}

#[test]
fn test_missing_config_fails() {
    let temp = TempDir::new().unwrap();

    sealnote_cmd(temp.path())
        .arg("some note")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("config"));
}

#[test]
fn test_wrong_key_length_fails() {
    let temp = TempDir::new().unwrap();
    write_config_with_key(temp.path(), "tooshort");

    sealnote_cmd(temp.path())
        .arg("some note")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Key must be"));
}

#[test]
fn test_tampered_row_fails_listing() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path());

    add_note(temp.path(), &["pristine"]);

    // Corrupt the stored ciphertext directly
    let db = rusqlite::Connection::open(temp.path().join("notes.db")).unwrap();
    db.execute(
        "UPDATE notes SET note = 'QUFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQQ==' WHERE id = 1",
        [],
    )
    .unwrap();
    drop(db);

    sealnote_cmd(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Decryption failed"));
}

#[test]
fn test_notes_survive_across_invocations() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path());

    add_note(temp.path(), &["persistent", "note"]);

    // A completely fresh process sees the note
    sealnote_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("persistent note"));
}
