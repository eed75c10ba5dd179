use crate::common::money::Money;
use crate::domain::currency::Currency;

/// A named store of money in one currency with a running balance.
///
/// The balance is only ever touched through [`Account::apply_amount`]; the
/// ledger keeps it equal to the sum of all currently-applied transaction
/// amounts for this account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: u32,
    name: String,
    currency: Currency,
    balance: Money,
}

impl Account {
    /// Creates an account with an exact zero balance. The id must come from
    /// [`AssetRegistry::next_unique_id`](crate::domain::registry::AssetRegistry::next_unique_id)
    /// or a persisted row.
    pub fn new(id: u32, name: impl Into<String>, currency: Currency) -> Self {
        Self {
            id,
            name: name.into(),
            currency,
            balance: Money::zero(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn balance(&self) -> &Money {
        &self.balance
    }

    /// Credits (positive) or debits (negative) the balance. Exact decimal
    /// arithmetic, no rounding.
    pub fn apply_amount(&mut self, delta: &Money) {
        self.balance += delta;
    }

    /// Accounts are identified by id; names are labels and may repeat.
    pub fn same_identity(&self, other: &Account) -> bool {
        self.id == other.id
    }
}
