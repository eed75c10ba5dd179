pub mod account;
pub mod currency;
pub mod ledger;
pub mod registry;
pub mod transaction;
