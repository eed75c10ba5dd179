//! Persistence gateway for accounts and transactions.
//!
//! The core never talks to a database directly; it consumes the narrow
//! [`LedgerStore`] trait, with [`sqlite::SqliteStore`] as the real backend
//! and [`memory::MemoryStore`] as an in-memory fake. All boundary encodings
//! are textual: ISO-8601 calendar dates and exact decimal amount strings,
//! never floats.

pub mod memory;
pub mod sqlite;

use std::str::FromStr;

use chrono::NaiveDate;
use tracing::warn;

use crate::common::{error::LedgerError, money::Money};
use crate::domain::{
    account::Account, currency::Currency, ledger::Ledger, registry::AssetRegistry,
    transaction::Transaction,
};

/// A stored account row, fields in their boundary encodings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRow {
    pub id: u32,
    pub name: String,
    pub currency_id: u8,
    pub balance: String,
}

impl AccountRow {
    pub fn from_account(account: &Account) -> Self {
        Self {
            id: account.id(),
            name: account.name().to_owned(),
            currency_id: account.currency().id(),
            balance: account.balance().to_string(),
        }
    }

    /// Decodes the row into a zero-balance account plus its stored balance.
    /// The balance is returned separately: replaying the journal is what
    /// puts money on an account, the stored column only cross-checks it.
    pub fn decode(&self) -> Result<(Account, Money), LedgerError> {
        let currency = Currency::from_id(self.currency_id)
            .ok_or(LedgerError::UnknownCurrency(self.currency_id))?;
        let balance = Money::from_str(&self.balance).map_err(|e| LedgerError::BadAmount {
            value: self.balance.clone(),
            reason: e.to_string(),
        })?;
        Ok((Account::new(self.id, self.name.clone(), currency), balance))
    }
}

/// A stored transaction row, fields in their boundary encodings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub name: String,
    pub description: Option<String>,
    pub account_id: u32,
    pub date: String,
    pub amount: String,
}

impl TransactionRow {
    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            name: tx.name.clone(),
            description: tx.description.clone(),
            account_id: tx.account_id,
            date: tx.date.to_string(),
            amount: tx.amount.to_string(),
        }
    }

    pub fn decode(&self) -> Result<Transaction, LedgerError> {
        let date = NaiveDate::from_str(&self.date).map_err(|e| LedgerError::BadDate {
            value: self.date.clone(),
            reason: e.to_string(),
        })?;
        let amount = Money::from_str(&self.amount).map_err(|e| LedgerError::BadAmount {
            value: self.amount.clone(),
            reason: e.to_string(),
        })?;
        Ok(Transaction {
            name: self.name.clone(),
            description: self.description.clone(),
            account_id: self.account_id,
            date,
            amount,
        })
    }
}

/// Load/save contract for a backing store. Save and delete report rows
/// affected; faults propagate unchanged and must not leave the in-memory
/// side mutated.
pub trait LedgerStore {
    fn load_accounts(&self) -> Result<Vec<AccountRow>, LedgerError>;

    /// Loads stored transactions, optionally only those dated on or after
    /// `since`.
    fn load_transactions(&self, since: Option<NaiveDate>)
    -> Result<Vec<TransactionRow>, LedgerError>;

    fn save_account(&mut self, account: &Account) -> Result<usize, LedgerError>;
    fn delete_account(&mut self, id: u32) -> Result<usize, LedgerError>;

    fn save_transaction(&mut self, tx: &Transaction) -> Result<usize, LedgerError>;
    fn delete_transaction(&mut self, tx: &Transaction) -> Result<usize, LedgerError>;
}

/// Rebuilds a ledger from a store: accounts come back at zero, then every
/// stored transaction is replayed through [`Ledger::add_transaction`], so the
/// balance invariant holds by construction. A stored balance column that
/// disagrees with its replayed balance is logged and the replayed value wins.
pub fn load_ledger<S: LedgerStore>(store: &S) -> Result<Ledger, LedgerError> {
    let mut registry = AssetRegistry::new();
    let mut stored_balances = Vec::new();

    for row in store.load_accounts()? {
        let (account, stored_balance) = row.decode()?;
        stored_balances.push((account.id(), stored_balance));
        registry.add_account(account);
    }

    let mut ledger = Ledger::with_assets(registry);
    for row in store.load_transactions(None)? {
        ledger.add_transaction(row.decode()?)?;
    }

    for (id, stored) in stored_balances {
        let replayed = ledger
            .assets()
            .account(id)
            .map(Account::balance)
            .cloned()
            .unwrap_or_else(Money::zero);
        if replayed != stored {
            warn!(
                account = id,
                %stored,
                %replayed,
                "stored balance disagrees with replayed journal"
            );
        }
    }
    Ok(ledger)
}

/// Saves every account and journaled transaction of the ledger.
pub fn save_ledger<S: LedgerStore>(store: &mut S, ledger: &Ledger) -> Result<(), LedgerError> {
    for account in ledger.assets().accounts() {
        store.save_account(account)?;
    }
    for (_, day) in ledger.records_between(NaiveDate::MIN, NaiveDate::MAX) {
        for tx in day {
            store.save_transaction(tx)?;
        }
    }
    Ok(())
}
