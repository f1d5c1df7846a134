use repocat::{repocat, output, FileContent, RepocatBuilder, Snapshot};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn content_of<'a>(snapshot: &'a Snapshot, rel: &str) -> &'a FileContent {
    &snapshot
        .files
        .iter()
        .find(|f| f.rel_path == Path::new(rel))
        .unwrap_or_else(|| panic!("missing entry for {rel}"))
        .content
}

#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello\n").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/b.bin"), [0u8, 0xFF, 0x00, 0x10]).unwrap();
    fs::write(dir.path().join("sub/c.txt"), "world\n").unwrap();

    let options = RepocatBuilder::new(dir.path()).build();
    let snapshot = repocat(options).unwrap();

    // One tree line per non-excluded entry, directories included.
    assert_eq!(snapshot.tree.lines().count(), 4);
    assert!(snapshot.tree.contains("sub\n"));
    assert!(snapshot.tree.contains("a.txt"));
    // Entries under sub are indented one level below the root.
    assert!(snapshot.tree.contains("│   ├── ") || snapshot.tree.contains("│   └── "));

    assert_eq!(snapshot.files.len(), 3);
    match content_of(&snapshot, "a.txt") {
        FileContent::Text(bytes) => assert_eq!(bytes, b"hello\n"),
        FileContent::Binary => panic!("a.txt classified as binary"),
    }
    match content_of(&snapshot, "sub/c.txt") {
        FileContent::Text(bytes) => assert_eq!(bytes, b"world\n"),
        FileContent::Binary => panic!("c.txt classified as binary"),
    }
    assert!(matches!(content_of(&snapshot, "sub/b.bin"), FileContent::Binary));

    let out = dir.path().join("snapshot.txt");
    output::ensure_absent(&out).unwrap();
    output::write_document(&out, &snapshot).unwrap();
    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("\n// a.txt\nhello\n"));
    assert!(written.contains("\n// sub/c.txt\nworld\n"));
    assert!(written.contains("\n// sub/b.bin\n(Binary file)\n"));
    assert!(!written.contains('\u{0}'));
}

#[test]
fn integration_excluding_sub_removes_its_entries() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello\n").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/b.bin"), [0u8, 0xFF, 0x00, 0x10]).unwrap();
    fs::write(dir.path().join("sub/c.txt"), "world\n").unwrap();

    let options = RepocatBuilder::new(dir.path())
        .exclude(vec!["sub".into()])
        .build();
    let snapshot = repocat(options).unwrap();

    assert_eq!(snapshot.tree, "└── a.txt\n");
    assert_eq!(snapshot.files.len(), 1);
    let doc = String::from_utf8(output::render_document(&snapshot)).unwrap();
    assert!(!doc.contains("sub"));
    assert!(!doc.contains("world"));
}

#[test]
fn integration_runs_are_idempotent() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello\n").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/c.txt"), "world\n").unwrap();

    let first = repocat(RepocatBuilder::new(dir.path()).build()).unwrap();
    let second = repocat(RepocatBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(
        output::render_document(&first),
        output::render_document(&second)
    );
}
