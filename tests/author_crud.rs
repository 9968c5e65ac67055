use bookshelf_core::db::open_db_in_memory;
use bookshelf_core::repo::author_repo::resolve_or_create_author;
use bookshelf_core::{
    AuthorRepository, BookRepository, SqliteAuthorRepository, SqliteBookRepository, StoreConfig,
};
use rusqlite::Connection;

#[test]
fn resolve_or_create_is_idempotent_for_same_name() {
    let conn = open_db_in_memory(&StoreConfig::empty()).unwrap();
    let authors = SqliteAuthorRepository::new(&conn);

    let first = authors.resolve_or_create("Ursula K. Le Guin").unwrap();
    let second = authors.resolve_or_create("Ursula K. Le Guin").unwrap();

    assert_eq!(first, second);
    assert_eq!(authors.list_authors().unwrap().len(), 1);
}

#[test]
fn resolve_or_create_returns_existing_id_unchanged() {
    let conn = open_db_in_memory(&StoreConfig::empty()).unwrap();
    let authors = SqliteAuthorRepository::new(&conn);

    let created = authors.create_author("Italo Calvino").unwrap();
    let resolved = resolve_or_create_author(&conn, "Italo Calvino").unwrap();

    assert_eq!(resolved, created.id);
    let loaded = authors.get_author(created.id).unwrap().unwrap();
    assert_eq!(loaded.name, "Italo Calvino");
}

#[test]
fn create_get_and_lookup_by_name() {
    let conn = open_db_in_memory(&StoreConfig::empty()).unwrap();
    let authors = SqliteAuthorRepository::new(&conn);

    let created = authors.create_author("Stanislaw Lem").unwrap();
    assert!(created.id > 0);

    let by_id = authors.get_author(created.id).unwrap().unwrap();
    assert_eq!(by_id, created);

    let by_name = authors.get_author_by_name("Stanislaw Lem").unwrap().unwrap();
    assert_eq!(by_name.id, created.id);

    assert!(authors.get_author(9999).unwrap().is_none());
    assert!(authors.get_author_by_name("Nobody").unwrap().is_none());
}

#[test]
fn delete_author_cascades_to_their_books() {
    let conn = open_db_in_memory(&StoreConfig::empty()).unwrap();
    let authors = SqliteAuthorRepository::new(&conn);
    let books = SqliteBookRepository::new(&conn);

    books.create_book("Solaris", "Stanislaw Lem").unwrap();
    books.create_book("The Cyberiad", "Stanislaw Lem").unwrap();
    books.create_book("The Dispossessed", "Ursula K. Le Guin").unwrap();

    let lem = authors.get_author_by_name("Stanislaw Lem").unwrap().unwrap();
    authors.delete_author(lem.id).unwrap();

    assert!(books.list_books_by_author(lem.id).unwrap().is_empty());
    let remaining = books.list_books().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "The Dispossessed");
}

#[test]
fn delete_author_restores_unenforced_cascade_mode() {
    let conn = open_db_in_memory(&StoreConfig::empty()).unwrap();
    let authors = SqliteAuthorRepository::new(&conn);

    let created = authors.create_author("Jorge Luis Borges").unwrap();
    authors.delete_author(created.id).unwrap();

    assert_eq!(foreign_keys_pragma(&conn), 0);
}

#[test]
fn delete_absent_author_is_a_noop_at_repo_level() {
    let conn = open_db_in_memory(&StoreConfig::empty()).unwrap();
    let authors = SqliteAuthorRepository::new(&conn);

    authors.delete_author(42).unwrap();
    assert!(authors.list_authors().unwrap().is_empty());
}

fn foreign_keys_pragma(conn: &Connection) -> i64 {
    conn.query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap()
}
