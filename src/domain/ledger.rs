use std::collections::BTreeMap;

use chrono::{Local, Months, NaiveDate};
use tracing::debug;

use crate::common::{error::LedgerError, money::Money};
use crate::domain::{registry::AssetRegistry, transaction::Transaction};

/// The date-ordered journal of transactions plus the account registry it
/// affects.
///
/// A transaction sits in the date index if and only if its amount has been
/// applied to its account's balance; [`Ledger::add_transaction`] and
/// [`Ledger::remove_transaction`] are the only paths that change either side,
/// and each keeps the two in step.
#[derive(Debug, Default)]
pub struct Ledger {
    assets: AssetRegistry,
    records: BTreeMap<NaiveDate, Vec<Transaction>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            assets: AssetRegistry::new(),
            records: BTreeMap::new(),
        }
    }

    pub fn with_assets(assets: AssetRegistry) -> Self {
        Self {
            assets,
            records: BTreeMap::new(),
        }
    }

    pub fn assets(&self) -> &AssetRegistry {
        &self.assets
    }

    pub fn assets_mut(&mut self) -> &mut AssetRegistry {
        &mut self.assets
    }

    /// Applies the transaction to its account and appends it to that day's
    /// records.
    ///
    /// Returns `Ok(false)` without mutating anything when an equal
    /// transaction is already journaled for that date. Referencing an
    /// unregistered account id is a caller error and surfaces as
    /// [`LedgerError::UnknownAccount`]; the account must exist before any
    /// transaction naming it is added.
    pub fn add_transaction(&mut self, tx: Transaction) -> Result<bool, LedgerError> {
        if self
            .records
            .get(&tx.date)
            .is_some_and(|day| day.contains(&tx))
        {
            debug!(name = %tx.name, date = %tx.date, "duplicate transaction rejected");
            return Ok(false);
        }

        let account = self
            .assets
            .account_mut(tx.account_id)
            .ok_or(LedgerError::UnknownAccount(tx.account_id))?;
        account.apply_amount(&tx.amount);

        debug!(name = %tx.name, date = %tx.date, amount = %tx.amount, "transaction applied");
        self.records.entry(tx.date).or_default().push(tx);
        Ok(true)
    }

    /// Removes the transaction by value and reverses its balance effect.
    ///
    /// Returns `Ok(false)` when the day or the transaction is absent, so
    /// repeated removal is a no-op.
    pub fn remove_transaction(&mut self, tx: &Transaction) -> Result<bool, LedgerError> {
        let Some(day) = self.records.get_mut(&tx.date) else {
            return Ok(false);
        };
        let Some(position) = day.iter().position(|journaled| journaled == tx) else {
            return Ok(false);
        };

        let account = self
            .assets
            .account_mut(tx.account_id)
            .ok_or(LedgerError::UnknownAccount(tx.account_id))?;
        account.apply_amount(&-&tx.amount);

        day.remove(position);
        if day.is_empty() {
            self.records.remove(&tx.date);
        }
        debug!(name = %tx.name, date = %tx.date, "transaction reversed");
        Ok(true)
    }

    /// All transactions journaled for the exact date, in append order.
    pub fn records_for_day(&self, date: NaiveDate) -> &[Transaction] {
        self.records
            .get(&date)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Day-by-day records over the inclusive range `[start, end]`, in date
    /// order with within-day append order preserved.
    pub fn records_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = (NaiveDate, &[Transaction])> {
        self.records
            .range(start..=end)
            .map(|(date, day)| (*date, day.as_slice()))
    }

    /// Records over the inclusive range `[today − months, today]`.
    pub fn records_for_months(
        &self,
        months: u32,
    ) -> impl Iterator<Item = (NaiveDate, &[Transaction])> {
        let end = today();
        let start = end
            .checked_sub_months(Months::new(months))
            .unwrap_or(NaiveDate::MIN);
        self.records_between(start, end)
    }

    /// Net signed flow per account id over the inclusive range
    /// `[since, today]`. Accounts with no transactions in range do not
    /// appear in the result.
    pub fn asset_flow_since(&self, since: NaiveDate) -> BTreeMap<u32, Money> {
        let mut flow: BTreeMap<u32, Money> = BTreeMap::new();
        for (_, day) in self.records_between(since, today()) {
            for tx in day {
                *flow.entry(tx.account_id).or_insert_with(Money::zero) += &tx.amount;
            }
        }
        flow
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
