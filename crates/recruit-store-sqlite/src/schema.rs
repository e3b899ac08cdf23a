//! SQL schema for the recruiting-pipeline SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- AUTOINCREMENT so that ids of deleted rows are never handed out again.
CREATE TABLE IF NOT EXISTS candidates (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    name    TEXT NOT NULL,
    email   TEXT NOT NULL UNIQUE,
    status  TEXT NOT NULL           -- free-form: 'pre-hire', 'active', ...
);

CREATE TABLE IF NOT EXISTS employees (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    email       TEXT NOT NULL UNIQUE,
    designation TEXT NOT NULL
);

-- The (candidate_id, employee_id) pair is not UNIQUE here:
-- it is only enforced when an interview is first scheduled.
CREATE TABLE IF NOT EXISTS interviews (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    round        INTEGER NOT NULL,
    candidate_id INTEGER NOT NULL REFERENCES candidates(id),
    employee_id  INTEGER NOT NULL REFERENCES employees(id)
);

CREATE INDEX IF NOT EXISTS interviews_candidate_idx ON interviews(candidate_id);
CREATE INDEX IF NOT EXISTS interviews_employee_idx  ON interviews(employee_id);

PRAGMA user_version = 1;
";
