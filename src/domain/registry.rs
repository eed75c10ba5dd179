use std::collections::BTreeMap;

use crate::common::money::Money;
use crate::domain::{account::Account, currency::Currency};

/// The owning collection of all known accounts, keyed by unique id.
///
/// Ids are non-negative and reusable: [`AssetRegistry::next_unique_id`]
/// always hands out the smallest id with no bound account, whatever the
/// history of insertions and removals.
#[derive(Debug, Default)]
pub struct AssetRegistry {
    accounts: BTreeMap<u32, Account>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self {
            accounts: BTreeMap::new(),
        }
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Inserts the account, rejecting a duplicate id. Returns whether the
    /// account was added; on `false` the registry is unchanged.
    pub fn add_account(&mut self, account: Account) -> bool {
        if self.accounts.contains_key(&account.id()) {
            return false;
        }
        self.accounts.insert(account.id(), account);
        true
    }

    /// Removes the account with the given id. Returns whether anything was
    /// removed. Referential cleanup of transactions naming this id is the
    /// caller's business.
    pub fn remove_account(&mut self, id: u32) -> bool {
        self.accounts.remove(&id).is_some()
    }

    pub fn account(&self, id: u32) -> Option<&Account> {
        self.accounts.get(&id)
    }

    pub(crate) fn account_mut(&mut self, id: u32) -> Option<&mut Account> {
        self.accounts.get_mut(&id)
    }

    /// Smallest non-negative integer not currently bound to an account.
    /// Keys are scanned in order, so the first gap (or the length of a
    /// gapless prefix) is the answer.
    pub fn next_unique_id(&self) -> u32 {
        let mut candidate = 0;
        for id in self.accounts.keys() {
            if *id != candidate {
                break;
            }
            candidate += 1;
        }
        candidate
    }

    /// Creates and registers a fresh zero-balance account, returning its id.
    pub fn create_account(&mut self, name: impl Into<String>, currency: Currency) -> u32 {
        let id = self.next_unique_id();
        self.accounts.insert(id, Account::new(id, name, currency));
        id
    }

    /// Aggregate balance per currency. Every known currency appears in the
    /// result, zero-initialized, before account balances are folded in.
    pub fn total_balance_per_currency(&self) -> BTreeMap<Currency, Money> {
        let mut totals: BTreeMap<Currency, Money> = Currency::ALL
            .iter()
            .map(|currency| (*currency, Money::zero()))
            .collect();

        for account in self.accounts.values() {
            if let Some(total) = totals.get_mut(&account.currency()) {
                *total += account.balance();
            }
        }
        totals
    }

    /// The currency holding the largest aggregate balance; ties break to the
    /// lowest currency id.
    pub fn dominant_currency(&self) -> Currency {
        let totals = self.total_balance_per_currency();
        let mut dominant = Currency::ALL[0];
        for currency in &Currency::ALL[1..] {
            if totals[currency] > totals[&dominant] {
                dominant = *currency;
            }
        }
        dominant
    }
}
