//! Shared fixtures for integration tests: schema and seed helpers for a news
//! database on disk.

use rusqlite::Connection;
use std::path::Path;

/// The catalog schema the report runs against.
#[allow(dead_code)]
pub const NEWS_SCHEMA: &str = "\
CREATE TABLE authors (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    bio TEXT
);
CREATE TABLE articles (
    id INTEGER PRIMARY KEY,
    author INTEGER NOT NULL REFERENCES authors(id),
    title TEXT NOT NULL,
    slug TEXT NOT NULL UNIQUE,
    lead TEXT,
    body TEXT,
    time TEXT
);
CREATE TABLE log (
    id INTEGER PRIMARY KEY,
    path TEXT,
    ip TEXT,
    method TEXT,
    status TEXT,
    time TEXT NOT NULL
);";

/// Create the news database at `path` and hand back a writer connection for
/// seeding. The store under test opens its own read-only connections.
#[allow(dead_code)]
pub fn create_news_db(path: &Path) -> Connection {
    let conn = Connection::open(path).expect("open seed db");
    conn.execute_batch(NEWS_SCHEMA).expect("create schema");
    conn
}

#[allow(dead_code)]
pub fn add_author(conn: &Connection, id: i64, name: &str) {
    conn.execute(
        "INSERT INTO authors (id, name) VALUES (?1, ?2)",
        rusqlite::params![id, name],
    )
    .expect("insert author");
}

#[allow(dead_code)]
pub fn add_article(conn: &Connection, id: i64, author: i64, title: &str, slug: &str) {
    conn.execute(
        "INSERT INTO articles (id, author, title, slug) VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![id, author, title, slug],
    )
    .expect("insert article");
}

#[allow(dead_code)]
pub fn hit(conn: &Connection, path: &str, status: &str, time: &str) {
    conn.execute(
        "INSERT INTO log (path, method, status, time) VALUES (?1, 'GET', ?2, ?3)",
        rusqlite::params![path, status, time],
    )
    .expect("insert log row");
}

#[allow(dead_code)]
pub fn hits(conn: &Connection, n: usize, path: &str, status: &str, time: &str) {
    let mut stmt = conn
        .prepare("INSERT INTO log (path, method, status, time) VALUES (?1, 'GET', ?2, ?3)")
        .expect("prepare log insert");
    for _ in 0..n {
        stmt.execute(rusqlite::params![path, status, time])
            .expect("insert log row");
    }
}
