use bookshelf_core::db::{open_db, open_db_in_memory};
use bookshelf_core::{
    AuthorRepository, BookRepository, SeedRecord, SqliteAuthorRepository, SqliteBookRepository,
    StoreConfig,
};
use rusqlite::Connection;

#[test]
fn fresh_store_gets_tables_and_default_seed() {
    let conn = open_db_in_memory(&StoreConfig::default()).unwrap();

    assert_table_exists(&conn, "authors");
    assert_table_exists(&conn, "books");

    let authors = SqliteAuthorRepository::new(&conn).list_authors().unwrap();
    assert_eq!(authors.len(), 3);
    assert_eq!(authors[0].id, 1);
    assert_eq!(authors[0].name, "Swaroop C. H.");
    assert_eq!(authors[2].id, 3);
    assert_eq!(authors[2].name, "Leo Tolstoy");

    let books = SqliteBookRepository::new(&conn).list_books().unwrap();
    assert_eq!(books.len(), 3);
    assert_eq!(books[1].title, "Moby-Dick; or, The Whale");
    assert_eq!(books[1].author.as_deref(), Some("Herman Melville"));
}

#[test]
fn opening_same_database_twice_does_not_reseed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bookshelf.db");
    let config = StoreConfig::default();

    let conn_first = open_db(&path, &config).unwrap();
    let created = SqliteBookRepository::new(&conn_first)
        .create_book("Walden", "Henry David Thoreau")
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path, &config).unwrap();
    let books = SqliteBookRepository::new(&conn_second).list_books().unwrap();
    // Three seed rows plus the one added between opens; a re-seed would
    // have duplicated the fixed dataset or reset ids.
    assert_eq!(books.len(), 4);
    assert!(books.iter().any(|book| book.id == created.id));

    let authors = SqliteAuthorRepository::new(&conn_second)
        .list_authors()
        .unwrap();
    assert_eq!(authors.len(), 4);
}

#[test]
fn custom_seed_preserves_caller_supplied_author_ids() {
    let config = StoreConfig::with_seed(vec![
        SeedRecord::new(1, "A Byte of Python", "Swaroop C. H."),
        SeedRecord::new(2, "Moby-Dick", "Herman Melville"),
    ]);
    let conn = open_db_in_memory(&config).unwrap();

    let authors = SqliteAuthorRepository::new(&conn).list_authors().unwrap();
    assert_eq!(authors.len(), 2);
    assert_eq!((authors[0].id, authors[0].name.as_str()), (1, "Swaroop C. H."));
    assert_eq!((authors[1].id, authors[1].name.as_str()), (2, "Herman Melville"));

    let books = SqliteBookRepository::new(&conn).list_books().unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].author.as_deref(), Some("Swaroop C. H."));
    assert_eq!(books[1].author.as_deref(), Some("Herman Melville"));
}

#[test]
fn empty_seed_creates_tables_without_rows() {
    let conn = open_db_in_memory(&StoreConfig::empty()).unwrap();

    assert_table_exists(&conn, "authors");
    assert_table_exists(&conn, "books");
    assert!(SqliteAuthorRepository::new(&conn)
        .list_authors()
        .unwrap()
        .is_empty());
    assert!(SqliteBookRepository::new(&conn)
        .list_books()
        .unwrap()
        .is_empty());
}

#[test]
fn returned_connection_has_foreign_keys_off() {
    let conn = open_db_in_memory(&StoreConfig::empty()).unwrap();
    assert_eq!(foreign_keys_pragma(&conn), 0);
}

fn foreign_keys_pragma(conn: &Connection) -> i64 {
    conn.query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
