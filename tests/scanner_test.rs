use debscan::scanner::KeywordScanner;
use debscan::LanguageMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &[u8]) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn decode_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a.c", b"static int decode(void) { return 0; }");
    write(temp_dir.path(), "b.txt", b"decode");
    temp_dir
}

#[test]
fn test_keyword_in_accepted_extension() {
    let tree = decode_tree();
    let scanner = KeywordScanner::new([".c"], [b"decode"]);
    assert!(scanner.scan(tree.path()).unwrap());
}

#[test]
fn test_keyword_only_outside_accepted_extensions() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a.c", b"int encode(void);");
    write(temp_dir.path(), "b.txt", b"decode");

    let scanner = KeywordScanner::new([".c"], [b"decode"]);
    assert!(!scanner.scan(temp_dir.path()).unwrap());
}

#[test]
fn test_empty_keywords_match_any_accepted_file() {
    let tree = decode_tree();
    let keywords: [&[u8]; 0] = [];
    let scanner = KeywordScanner::new([".c"], keywords);
    assert!(scanner.scan(tree.path()).unwrap());
}

#[test]
fn test_no_accepted_files() {
    let tree = decode_tree();
    let keywords: [&[u8]; 0] = [];
    let scanner = KeywordScanner::new([".py"], keywords);
    assert!(!scanner.scan(tree.path()).unwrap());
}

#[test]
fn test_nested_directories_and_uppercase_suffix() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "zlib-1.3/contrib/minizip/UNZIP.C", b"inflateInit2");

    let scanner = KeywordScanner::new([".c"], [b"inflateInit2"]);
    assert!(scanner.scan(temp_dir.path()).unwrap());
}

#[test]
fn test_compound_suffix_must_match_exactly() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "config.h.in", b"decode");
    write(temp_dir.path(), "parser.tab.c", b"decode");

    let scanner = KeywordScanner::new([".c", ".h"], [b"decode"]);
    assert!(!scanner.scan(temp_dir.path()).unwrap());

    let scanner = KeywordScanner::new([".tab.c"], [b"decode"]);
    assert!(scanner.scan(temp_dir.path()).unwrap());
}

#[test]
fn test_binary_content_searched_as_bytes() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "blob.c", b"\x00\xff\xfeMAGIC\x00");

    let scanner = KeywordScanner::new([".c"], [b"MAGIC"]);
    assert!(scanner.scan(temp_dir.path()).unwrap());
}

#[test]
fn test_extensions_from_language_selection() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "setup.py", b"import zlib");
    write(temp_dir.path(), "src/module.c", b"#include <Python.h>");

    let map = LanguageMap::builtin();
    let selection = map.select(&["python"]).unwrap();
    let scanner = KeywordScanner::new(selection.extensions(), [b"zlib"]);
    assert!(scanner.scan(temp_dir.path()).unwrap());

    let scanner = KeywordScanner::new(selection.extensions(), [b"Python.h"]);
    assert!(!scanner.scan(temp_dir.path()).unwrap());
}
