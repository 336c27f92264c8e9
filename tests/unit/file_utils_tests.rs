/*!
 * Tests for file utility functionality
 */

use subtempo::file_utils::FileManager;

use crate::common;

#[test]
fn test_fileExists_shouldDistinguishFilesAndDirectories() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir_path = temp_dir.path().to_path_buf();
    let file_path = common::create_test_file(&dir_path, "a.srt", "content").unwrap();

    assert!(FileManager::file_exists(&file_path));
    assert!(!FileManager::file_exists(&dir_path));
    assert!(FileManager::dir_exists(&dir_path));
    assert!(!FileManager::file_exists(dir_path.join("missing.srt")));
}

#[test]
fn test_readToString_shouldReturnContent() {
    let temp_dir = common::create_temp_dir().unwrap();
    let file_path =
        common::create_test_file(&temp_dir.path().to_path_buf(), "a.txt", "line one\nline two").unwrap();

    let content = FileManager::read_to_string(&file_path).unwrap();
    assert_eq!(content, "line one\nline two");
}

#[test]
fn test_readToString_withMissingFile_shouldFailWithContext() {
    let error = FileManager::read_to_string("/no/such/file.srt").unwrap_err();
    assert!(error.to_string().contains("Failed to read file"));
}

#[test]
fn test_writeToFile_shouldCreateParentDirectories() {
    let temp_dir = common::create_temp_dir().unwrap();
    let nested = temp_dir.path().join("a").join("b").join("out.srt");

    FileManager::write_to_file(&nested, "saved").unwrap();

    assert_eq!(FileManager::read_to_string(&nested).unwrap(), "saved");
}

#[test]
fn test_extension_shouldLowercase() {
    assert_eq!(FileManager::extension("movie.SRT"), Some("srt".to_string()));
    assert_eq!(FileManager::extension("archive.sub"), Some("sub".to_string()));
    assert_eq!(FileManager::extension("noextension"), None);
}
