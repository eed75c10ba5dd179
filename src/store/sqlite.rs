use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{Connection, params};
use tracing::debug;

use crate::common::error::LedgerError;
use crate::domain::{account::Account, transaction::Transaction};
use crate::store::{AccountRow, LedgerStore, TransactionRow};

/// SQLite-backed [`LedgerStore`].
///
/// Amounts and dates are stored as TEXT (exact decimal strings, ISO-8601
/// dates); currency is stored as its stable integer id. The schema is
/// created on open.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LedgerError> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Private on-disk file is not always wanted; tests and ephemeral runs
    /// use an in-memory database.
    pub fn open_in_memory() -> Result<Self, LedgerError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, LedgerError> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS accounts (
                account_id INTEGER PRIMARY KEY,
                name       TEXT NOT NULL,
                currency   INTEGER NOT NULL,
                balance    TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS transactions (
                transaction_id INTEGER PRIMARY KEY AUTOINCREMENT,
                name           TEXT NOT NULL,
                description    TEXT,
                account_id     INTEGER NOT NULL,
                date           TEXT NOT NULL,
                amount         TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);",
        )?;
        Ok(Self { conn })
    }
}

impl LedgerStore for SqliteStore {
    fn load_accounts(&self) -> Result<Vec<AccountRow>, LedgerError> {
        let mut stmt = self
            .conn
            .prepare("SELECT account_id, name, currency, balance FROM accounts ORDER BY account_id")?;
        let rows = stmt.query_map([], |row| {
            Ok(AccountRow {
                id: row.get(0)?,
                name: row.get(1)?,
                currency_id: row.get(2)?,
                balance: row.get(3)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn load_transactions(
        &self,
        since: Option<NaiveDate>,
    ) -> Result<Vec<TransactionRow>, LedgerError> {
        let map_row = |row: &rusqlite::Row<'_>| {
            Ok(TransactionRow {
                name: row.get(0)?,
                description: row.get(1)?,
                account_id: row.get(2)?,
                date: row.get(3)?,
                amount: row.get(4)?,
            })
        };

        // ISO dates sort lexicographically, so TEXT comparison is date order.
        let loaded = match since {
            Some(start) => {
                let mut stmt = self.conn.prepare(
                    "SELECT name, description, account_id, date, amount
                     FROM transactions WHERE date >= ?1
                     ORDER BY date, transaction_id",
                )?;
                let rows = stmt.query_map(params![start.to_string()], map_row)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
            None => {
                let mut stmt = self.conn.prepare(
                    "SELECT name, description, account_id, date, amount
                     FROM transactions ORDER BY date, transaction_id",
                )?;
                let rows = stmt.query_map([], map_row)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
        };
        Ok(loaded)
    }

    fn save_account(&mut self, account: &Account) -> Result<usize, LedgerError> {
        debug!(id = account.id(), name = account.name(), "saving account");
        let updated = self.conn.execute(
            "INSERT OR REPLACE INTO accounts(account_id, name, currency, balance)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                account.id(),
                account.name(),
                account.currency().id(),
                account.balance().to_string(),
            ],
        )?;
        Ok(updated)
    }

    fn delete_account(&mut self, id: u32) -> Result<usize, LedgerError> {
        let updated = self
            .conn
            .execute("DELETE FROM accounts WHERE account_id = ?1", params![id])?;
        Ok(updated)
    }

    fn save_transaction(&mut self, tx: &Transaction) -> Result<usize, LedgerError> {
        debug!(name = %tx.name, date = %tx.date, "saving transaction");
        let updated = self.conn.execute(
            "INSERT INTO transactions(name, description, account_id, date, amount)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                tx.name,
                tx.description,
                tx.account_id,
                tx.date.to_string(),
                tx.amount.to_string(),
            ],
        )?;
        Ok(updated)
    }

    fn delete_transaction(&mut self, tx: &Transaction) -> Result<usize, LedgerError> {
        // Value-keyed delete; a duplicate row (same fields) would never have
        // been journaled, so at most one row matches.
        let updated = self.conn.execute(
            "DELETE FROM transactions
             WHERE name = ?1 AND description IS ?2 AND account_id = ?3
               AND date = ?4 AND amount = ?5",
            params![
                tx.name,
                tx.description,
                tx.account_id,
                tx.date.to_string(),
                tx.amount.to_string(),
            ],
        )?;
        Ok(updated)
    }
}
