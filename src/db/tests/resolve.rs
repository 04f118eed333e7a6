use super::{add_book, add_file, add_folder, open_catalog};

#[test]
fn test_resolve_by_path() {
    let (_dir, db) = open_catalog();

    add_book(&db, 1, "Some Book", "Author A");
    add_folder(&db, 10, "/mnt/ext1/Fiction");
    add_file(&db, 100, 1, 10, "book.epub");

    // The firmware stores the folder with its own mount prefix; the host
    // computes "Fiction" relative to the device root.
    let resolved = db.resolve_book("Fiction", "book.epub").unwrap();
    assert_eq!(resolved, Some(1));
}

#[test]
fn test_resolve_by_exact_folder_name() {
    let (_dir, db) = open_catalog();

    add_book(&db, 1, "Some Book", "Author A");
    add_folder(&db, 10, "Books/Fiction");
    add_file(&db, 100, 1, 10, "book.epub");

    let resolved = db.resolve_book("Books/Fiction", "book.epub").unwrap();
    assert_eq!(resolved, Some(1));
}

#[test]
fn test_resolve_root_level_file() {
    let (_dir, db) = open_catalog();

    add_book(&db, 1, "Some Book", "Author A");
    add_folder(&db, 10, "/mnt/ext1");
    add_file(&db, 100, 1, 10, "book.epub");

    let resolved = db.resolve_book("", "book.epub").unwrap();
    assert_eq!(resolved, Some(1));
}

#[test]
fn test_resolve_missing_reports_not_found() {
    let (_dir, db) = open_catalog();

    add_book(&db, 1, "Some Book", "Author A");
    add_folder(&db, 10, "/mnt/ext1/Fiction");
    add_file(&db, 100, 1, 10, "book.epub");

    let resolved = db.resolve_book("Fiction", "missing.epub").unwrap();
    assert_eq!(resolved, None);
}

#[test]
fn test_resolve_wrong_folder_reports_not_found() {
    let (_dir, db) = open_catalog();

    add_book(&db, 1, "Some Book", "Author A");
    add_folder(&db, 10, "/mnt/ext1/Fiction");
    add_file(&db, 100, 1, 10, "book.epub");

    let resolved = db.resolve_book("Science", "book.epub").unwrap();
    assert_eq!(resolved, None);
}

#[test]
fn test_resolve_legacy_by_author_and_title() {
    let (_dir, db) = open_catalog();

    add_book(&db, 1, "Some Book", "Author A, Author B");

    let resolved = db
        .resolve_legacy("Author A, Author B", "Some Book")
        .unwrap();
    assert_eq!(resolved, Some(1));

    let missing = db.resolve_legacy("Author A", "Some Book").unwrap();
    assert_eq!(missing, None);
}
