use chrono::NaiveDate;

use crate::common::money::Money;

/// One dated, signed monetary amount applied to one account.
///
/// Pure value object: created once, never mutated. Accounts are referenced
/// by id, not by an aliasing handle, so a persisted transaction stays valid
/// across load/save round-trips. Equality compares every field; the ledger
/// uses it for duplicate detection and removal-by-value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub name: String,
    pub description: Option<String>,
    pub account_id: u32,
    pub date: NaiveDate,
    /// Signed: positive credits the account, negative debits it.
    pub amount: Money,
}

impl Transaction {
    pub fn new(
        name: impl Into<String>,
        account_id: u32,
        date: NaiveDate,
        amount: Money,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            account_id,
            date,
            amount,
        }
    }

    pub fn with_description(
        name: impl Into<String>,
        description: impl Into<String>,
        account_id: u32,
        date: NaiveDate,
        amount: Money,
    ) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::new(name, account_id, date, amount)
        }
    }
}
