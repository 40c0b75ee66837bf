//! Integration tests
//!
//! Exercise the file operation primitives and the backup suite against a
//! real filesystem inside temporary directories.

use fsmaint::backup;
use fsmaint::config::BackupConfig;
use fsmaint::error::{BackupError, FileOpError};
use fsmaint::fileops::operations;
use tempfile::TempDir;

fn path_str(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().to_string()
}

fn backup_config(dir: &TempDir) -> BackupConfig {
    BackupConfig {
        directory: path_str(dir, "backups"),
        suffix: "_backup".to_string(),
    }
}

#[test]
fn test_create_then_getsize_is_zero() {
    let dir = TempDir::new().unwrap();
    let file = path_str(&dir, "empty.txt");

    operations::create_file(&file).unwrap();
    assert_eq!(operations::file_size(&file).unwrap(), 0);
}

#[test]
fn test_create_truncates_existing_file() {
    let dir = TempDir::new().unwrap();
    let file = path_str(&dir, "data.txt");

    operations::append_to_file(&file, "old content").unwrap();
    operations::create_file(&file).unwrap();
    assert_eq!(operations::file_size(&file).unwrap(), 0);
}

#[test]
fn test_append_is_additive_within_one_line() {
    let dir = TempDir::new().unwrap();
    let file = path_str(&dir, "append.txt");

    operations::append_to_file(&file, "A").unwrap();
    operations::append_to_file(&file, "B").unwrap();

    assert_eq!(operations::read_lines(&file).unwrap(), vec!["AB"]);
}

#[test]
fn test_delete_removes_file() {
    let dir = TempDir::new().unwrap();
    let file = path_str(&dir, "gone.txt");

    operations::create_file(&file).unwrap();
    operations::delete_file(&file).unwrap();

    assert!(matches!(
        operations::file_size(&file),
        Err(FileOpError::NotFound(_))
    ));
    // Deleting again fails, but does not crash
    assert!(operations::delete_file(&file).is_err());
}

#[test]
fn test_rename_moves_content() {
    let dir = TempDir::new().unwrap();
    let old_path = path_str(&dir, "old.txt");
    let new_path = path_str(&dir, "new.txt");

    operations::append_to_file(&old_path, "hello\nworld\n").unwrap();
    operations::rename_file(&old_path, &new_path).unwrap();

    assert!(operations::read_lines(&old_path).is_err());
    assert_eq!(
        operations::read_lines(&new_path).unwrap(),
        vec!["hello", "world"]
    );
}

#[test]
fn test_move_is_a_rename() {
    let dir = TempDir::new().unwrap();
    let source = path_str(&dir, "src.txt");
    let destination = path_str(&dir, "dst.txt");

    operations::append_to_file(&source, "payload").unwrap();
    operations::move_file(&source, &destination).unwrap();

    assert!(operations::read_lines(&source).is_err());
    assert_eq!(operations::read_lines(&destination).unwrap(), vec!["payload"]);
}

#[test]
fn test_copy_overwrites_destination() {
    let dir = TempDir::new().unwrap();
    let source = path_str(&dir, "src.txt");
    let destination = path_str(&dir, "dst.txt");

    operations::append_to_file(&source, "fresh").unwrap();
    operations::append_to_file(&destination, "stale").unwrap();

    operations::copy_file(&source, &destination).unwrap();

    assert_eq!(
        operations::read_lines(&destination).unwrap(),
        operations::read_lines(&source).unwrap()
    );
}

#[test]
fn test_list_is_sorted_lexicographically() {
    let dir = TempDir::new().unwrap();
    operations::create_file(&path_str(&dir, "b.txt")).unwrap();
    operations::create_file(&path_str(&dir, "a.txt")).unwrap();

    let entries = operations::list_directory(&dir.path().to_string_lossy()).unwrap();
    assert_eq!(entries, vec!["a.txt", "b.txt"]);
}

#[test]
fn test_list_invalid_paths() {
    let dir = TempDir::new().unwrap();
    let missing = path_str(&dir, "nope");
    let file = path_str(&dir, "plain.txt");
    operations::create_file(&file).unwrap();

    assert!(matches!(
        operations::list_directory(&missing),
        Err(FileOpError::NotFound(_))
    ));
    assert!(matches!(
        operations::list_directory(&file),
        Err(FileOpError::NotADirectory(_))
    ));
}

#[test]
fn test_read_distinguishes_empty_from_missing() {
    let dir = TempDir::new().unwrap();
    let empty = path_str(&dir, "empty.txt");
    let missing = path_str(&dir, "missing.txt");

    operations::create_file(&empty).unwrap();

    assert_eq!(operations::read_lines(&empty).unwrap(), Vec::<String>::new());
    assert!(matches!(
        operations::read_lines(&missing),
        Err(FileOpError::NotFound(_))
    ));
}

#[test]
fn test_getsize_rejects_directories() {
    let dir = TempDir::new().unwrap();
    let sub = path_str(&dir, "subdir");
    operations::create_directory(&sub).unwrap();

    assert!(matches!(
        operations::file_size(&sub),
        Err(FileOpError::NotAFile(_))
    ));
}

#[test]
fn test_mkdir_and_rmdir() {
    let dir = TempDir::new().unwrap();
    let nested = path_str(&dir, "a/b/c");

    operations::create_directory(&nested).unwrap();
    operations::create_file(&path_str(&dir, "a/b/c/f.txt")).unwrap();

    let top = path_str(&dir, "a");
    operations::remove_directory(&top).unwrap();
    assert!(matches!(
        operations::list_directory(&top),
        Err(FileOpError::NotFound(_))
    ));
}

#[test]
fn test_set_and_get_permissions() {
    let dir = TempDir::new().unwrap();
    let file = path_str(&dir, "perm.txt");

    operations::create_file(&file).unwrap();
    operations::set_permissions(&file, 0o600).unwrap();
    assert_eq!(operations::permissions(&file).unwrap(), 0o600);
}

#[test]
fn test_file_info_reports_metadata() {
    let dir = TempDir::new().unwrap();
    let file = path_str(&dir, "meta.txt");
    operations::append_to_file(&file, "abc").unwrap();

    let info = operations::file_info(&file).unwrap();
    assert_eq!(info.name, "meta.txt");
    assert_eq!(info.size, 3);
    assert!(!info.is_dir);
    assert!(info.modified.is_some());
}

#[test]
fn test_backup_and_restore_round_trip() {
    let dir = TempDir::new().unwrap();
    let config = backup_config(&dir);
    let file = path_str(&dir, "doc.txt");

    operations::append_to_file(&file, "original").unwrap();
    let backup_path = backup::backup_file(&file, &config).unwrap();
    assert!(backup_path.exists());

    // Clobber the original, then restore the backup over it
    operations::create_file(&file).unwrap();
    operations::append_to_file(&file, "clobbered").unwrap();

    backup::restore_backup(&file, &config).unwrap();
    assert_eq!(operations::read_lines(&file).unwrap(), vec!["original"]);
}

#[test]
fn test_list_backups_names() {
    let dir = TempDir::new().unwrap();
    let config = backup_config(&dir);
    let file = path_str(&dir, "doc.txt");

    operations::create_file(&file).unwrap();
    backup::backup_file(&file, &config).unwrap();

    let names = backup::list_backups(&file, &config).unwrap();
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("doc.txt_backup"));
}

#[test]
fn test_repeated_backups_never_overwrite() {
    let dir = TempDir::new().unwrap();
    let config = backup_config(&dir);
    let file = path_str(&dir, "doc.txt");

    operations::append_to_file(&file, "v1").unwrap();
    let first = backup::backup_file(&file, &config).unwrap();

    // Same second, same timestamp: the second copy must land elsewhere
    operations::append_to_file(&file, "v2").unwrap();
    let second = backup::backup_file(&file, &config).unwrap();

    assert_ne!(first, second);
    assert!(first.exists());
    assert!(second.exists());
    assert_eq!(backup::list_backups(&file, &config).unwrap().len(), 2);
}

#[test]
fn test_restore_without_backup_fails() {
    let dir = TempDir::new().unwrap();
    let config = backup_config(&dir);
    let covered = path_str(&dir, "covered.txt");

    operations::create_file(&covered).unwrap();
    backup::backup_file(&covered, &config).unwrap();

    // A backup of a different file must not satisfy this restore
    let other = path_str(&dir, "other.txt");
    operations::create_file(&other).unwrap();
    assert!(matches!(
        backup::restore_backup(&other, &config),
        Err(BackupError::NoBackupFound(_))
    ));
}

#[test]
fn test_checksum_detects_content_changes() {
    let dir = TempDir::new().unwrap();
    let one = path_str(&dir, "one.txt");
    let two = path_str(&dir, "two.txt");
    let twin = path_str(&dir, "twin.txt");

    operations::append_to_file(&one, "same").unwrap();
    operations::append_to_file(&twin, "same").unwrap();
    operations::append_to_file(&two, "different").unwrap();

    assert_eq!(
        backup::checksum(&one).unwrap(),
        backup::checksum(&twin).unwrap()
    );
    assert_ne!(
        backup::checksum(&one).unwrap(),
        backup::checksum(&two).unwrap()
    );

    assert!(backup::verify_backup(&one, &twin).is_ok());
    assert!(matches!(
        backup::verify_backup(&one, &two),
        Err(BackupError::ChecksumMismatch { .. })
    ));
}
