mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::models::Expense;

const INCOME_KEY: &str = "income";
const DISPLAY_NAME_KEY: &str = "display_name";

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set database pragmas")?;
        Self::from_connection(conn)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        Ok(db)
    }

    fn migrate(&mut self) -> Result<()> {
        // Check if schema_version table exists
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            // Fresh database - apply full schema
            self.conn.execute_batch(schema::SCHEMA_V2)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        // Existing database - check version and apply migrations
        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < 2 {
            self.split_legacy_labels()?;
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    /// Fill `icon`/`name` for rows carried over from the packed-label layout.
    fn split_legacy_labels(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        let legacy: Vec<(String, i64)> = {
            let mut stmt = tx.prepare("SELECT key, amount FROM expenses WHERE name = ''")?;
            let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
            rows.collect::<std::result::Result<Vec<_>, _>>()?
        };
        for (label, amount) in &legacy {
            let expense = Expense::from_legacy_label(label, *amount);
            tx.execute(
                "UPDATE expenses SET icon = ?1, name = ?2 WHERE key = ?3",
                params![expense.icon, expense.name, expense.key],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    // ── Settings ──────────────────────────────────────────────

    fn get_setting(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?)
    }

    fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Missing or unreadable income counts as 0.
    pub(crate) fn load_income(&self) -> Result<i64> {
        let Some(raw) = self.get_setting(INCOME_KEY)? else {
            return Ok(0);
        };
        let raw = raw.trim();
        let income = raw
            .parse::<i64>()
            .ok()
            .or_else(|| raw.parse::<f64>().ok().map(|f| f.trunc() as i64))
            .unwrap_or(0);
        Ok(income.max(0))
    }

    pub(crate) fn save_income(&self, income: i64) -> Result<()> {
        self.set_setting(INCOME_KEY, &income.to_string())
    }

    pub(crate) fn load_display_name(&self) -> Result<String> {
        Ok(self.get_setting(DISPLAY_NAME_KEY)?.unwrap_or_default())
    }

    pub(crate) fn save_display_name(&self, name: &str) -> Result<()> {
        self.set_setting(DISPLAY_NAME_KEY, name)
    }

    // ── Expenses ──────────────────────────────────────────────

    pub(crate) fn load_expenses(&self) -> Result<Vec<Expense>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key, icon, name, amount FROM expenses ORDER BY key")?;
        let rows = stmt.query_map([], |row| {
            let key: String = row.get(0)?;
            let name: String = row.get(2)?;
            Ok(Expense {
                name: if name.is_empty() { key.clone() } else { name },
                key,
                icon: row.get(1)?,
                amount: row.get::<_, i64>(3)?.max(0),
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Replace the whole expense mapping in one transaction.
    pub(crate) fn save_expenses<'a>(
        &mut self,
        expenses: impl IntoIterator<Item = &'a Expense>,
    ) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM expenses", [])?;
        for expense in expenses {
            tx.execute(
                "INSERT INTO expenses (key, amount, icon, name) VALUES (?1, ?2, ?3, ?4)",
                params![expense.key, expense.amount, expense.icon, expense.name],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn schema_version(&self) -> Result<i32> {
        Ok(self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })?)
    }
}
