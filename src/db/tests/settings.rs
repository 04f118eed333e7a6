use rusqlite::params;

use super::{add_book, add_settings, count, open_catalog};

#[test]
fn test_completion_absent_row() {
    let (_dir, db) = open_catalog();
    add_book(&db, 1, "Some Book", "Author A");

    assert_eq!(db.completion(1).unwrap(), None);
}

#[test]
fn test_completion_reads_flag() {
    let (_dir, db) = open_catalog();
    add_book(&db, 1, "Some Book", "Author A");
    add_settings(&db, 1, false);

    assert_eq!(db.completion(1).unwrap(), Some(false));

    db.conn
        .execute("UPDATE BOOKS_SETTINGS SET COMPLETED = 1 WHERE BOOKID = 1", [])
        .unwrap();
    assert_eq!(db.completion(1).unwrap(), Some(true));
}

#[test]
fn test_mark_completed_inserts_row() {
    let (_dir, db) = open_catalog();
    add_book(&db, 1, "Some Book", "Author A");

    db.mark_completed(1, false).unwrap();

    let (completed, ts): (i64, i64) = db
        .conn
        .query_row(
            "SELECT COMPLETED, COMPLETED_TS FROM BOOKS_SETTINGS
             WHERE BOOKID = 1 AND PROFILEID = 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(completed, 1);
    assert!(ts > 0);
}

#[test]
fn test_mark_completed_updates_existing_row() {
    let (_dir, db) = open_catalog();
    add_book(&db, 1, "Some Book", "Author A");
    add_settings(&db, 1, false);

    db.mark_completed(1, true).unwrap();

    // Exactly one row per (book, profile); no duplicate inserted.
    assert_eq!(count(&db, "SELECT COUNT(*) FROM BOOKS_SETTINGS"), 1);

    let completed: i64 = db
        .conn
        .query_row(
            "SELECT COMPLETED FROM BOOKS_SETTINGS WHERE BOOKID = ?1",
            params![1],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(completed, 1);
}
