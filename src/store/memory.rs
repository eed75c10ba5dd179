use std::collections::BTreeMap;

use chrono::NaiveDate;
use std::str::FromStr;

use crate::common::error::LedgerError;
use crate::domain::{account::Account, transaction::Transaction};
use crate::store::{AccountRow, LedgerStore, TransactionRow};

/// In-memory [`LedgerStore`] fake.
///
/// Behaves like the SQLite backend through the trait (same encodings, same
/// rows-affected results) without touching disk. Used by tests and by runs
/// that do not want persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: BTreeMap<u32, AccountRow>,
    transactions: Vec<TransactionRow>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for MemoryStore {
    fn load_accounts(&self) -> Result<Vec<AccountRow>, LedgerError> {
        Ok(self.accounts.values().cloned().collect())
    }

    fn load_transactions(
        &self,
        since: Option<NaiveDate>,
    ) -> Result<Vec<TransactionRow>, LedgerError> {
        let mut rows: Vec<TransactionRow> = match since {
            Some(start) => self
                .transactions
                .iter()
                .filter(|row| {
                    NaiveDate::from_str(&row.date)
                        .map(|d| d >= start)
                        .unwrap_or(false)
                })
                .cloned()
                .collect(),
            None => self.transactions.clone(),
        };
        // Stable sort keeps insertion order within a date, like the SQL
        // backend's (date, transaction_id) ordering.
        rows.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(rows)
    }

    fn save_account(&mut self, account: &Account) -> Result<usize, LedgerError> {
        self.accounts
            .insert(account.id(), AccountRow::from_account(account));
        Ok(1)
    }

    fn delete_account(&mut self, id: u32) -> Result<usize, LedgerError> {
        Ok(self.accounts.remove(&id).map_or(0, |_| 1))
    }

    fn save_transaction(&mut self, tx: &Transaction) -> Result<usize, LedgerError> {
        self.transactions.push(TransactionRow::from_transaction(tx));
        Ok(1)
    }

    fn delete_transaction(&mut self, tx: &Transaction) -> Result<usize, LedgerError> {
        let row = TransactionRow::from_transaction(tx);
        match self.transactions.iter().position(|stored| *stored == row) {
            Some(position) => {
                self.transactions.remove(position);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::money::Money;
    use crate::domain::currency::Currency;
    use crate::store::{load_ledger, save_ledger};

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    #[test]
    fn behaves_like_sqlite_through_the_trait() {
        let mut store = MemoryStore::new();
        store
            .save_account(&Account::new(0, "checking", Currency::Euro))
            .unwrap();
        let tx = Transaction::new("salary", 0, date("2024-01-01"), money("1000.00"));
        store.save_transaction(&tx).unwrap();

        assert_eq!(store.load_accounts().unwrap().len(), 1);
        assert_eq!(store.load_transactions(None).unwrap().len(), 1);
        assert_eq!(
            store.load_transactions(Some(date("2024-01-02"))).unwrap().len(),
            0
        );
        assert_eq!(store.delete_transaction(&tx).unwrap(), 1);
        assert_eq!(store.delete_transaction(&tx).unwrap(), 0);
        assert_eq!(store.delete_account(0).unwrap(), 1);
        assert_eq!(store.delete_account(0).unwrap(), 0);
    }

    #[test]
    fn save_then_load_ledger_round_trips_balances() {
        let mut ledger = crate::domain::ledger::Ledger::new();
        ledger.assets_mut().create_account("checking", Currency::Euro);
        ledger
            .add_transaction(Transaction::new("salary", 0, date("2024-01-01"), money("1000.00")))
            .unwrap();
        ledger
            .add_transaction(Transaction::new("rent", 0, date("2024-01-02"), money("-500.00")))
            .unwrap();

        let mut store = MemoryStore::new();
        save_ledger(&mut store, &ledger).unwrap();

        let reloaded = load_ledger(&store).unwrap();
        assert_eq!(
            reloaded.assets().account(0).unwrap().balance(),
            ledger.assets().account(0).unwrap().balance()
        );
        assert_eq!(reloaded.records_for_day(date("2024-01-02")).len(), 1);
    }
}
