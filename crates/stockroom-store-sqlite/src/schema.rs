//! SQL schema for the records table.
//!
//! Executed on every open; idempotent thanks to `CREATE TABLE IF NOT
//! EXISTS`. Future migrations will be gated on `PRAGMA user_version`,
//! which is a no-op stamp at version 1.

/// Full schema DDL.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS records (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    name           TEXT NOT NULL,
    price          INTEGER NOT NULL,
    quantity       INTEGER NOT NULL DEFAULT 0,
    supplier_name  TEXT NOT NULL,
    supplier_phone TEXT NOT NULL
);

PRAGMA user_version = 1;
";
