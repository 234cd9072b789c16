#[cfg(test)]
pub(crate) mod memory;
mod schema;
mod store;

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;

use crate::models::Expense;

pub(crate) use store::ExpenseStore;

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        tracing::debug!(path = %path.display(), "database ready");
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&mut self) -> Result<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            // Fresh database - apply full schema
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            tracing::info!(version = schema::CURRENT_VERSION, "created expense schema");
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                tracing::info!(from_version, "applying schema migration");
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    // ── Expenses ──────────────────────────────────────────────

    pub(crate) fn insert_expense(&self, expense: &Expense) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO expenses (date, category, amount, description)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                expense.date,
                expense.category,
                expense.amount,
                expense.description,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub(crate) fn get_expenses(&self) -> Result<Vec<Expense>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, date, category, amount, description FROM expenses ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Expense {
                id: Some(row.get(0)?),
                date: row.get(1)?,
                category: row.get(2)?,
                amount: row.get(3)?,
                description: row.get(4)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Returns `false` when no row had that id.
    pub(crate) fn delete_expense(&self, id: i64) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM expenses WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }
}
