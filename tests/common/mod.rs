use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// 32-byte key, selects AES-256-GCM.
pub const TEST_KEY: &str = "0123456789abcdef0123456789abcdef";

/// Write a config.yml pointing at a notes.db inside `dir`.
pub fn write_config(dir: &Path) {
    write_config_with_key(dir, TEST_KEY);
}

pub fn write_config_with_key(dir: &Path, key: &str) {
    let db_path = dir.join("notes.db");
    fs::write(
        dir.join("config.yml"),
        format!("database: {}\nkey: {}\n", db_path.display(), key),
    )
    .unwrap();
}

pub fn sealnote_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sealnote").unwrap();
    cmd.current_dir(dir);
    cmd
}
