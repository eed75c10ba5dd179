use std::io::Write;

use crate::domain::registry::AssetRegistry;

#[derive(serde::Serialize)]
/// Internal CSV output row representation matching the output headers.
///
/// Headers written (in this order): `id,name,currency,balance`. The balance
/// is an exact decimal string.
struct OutputRow<'a> {
    id: u32,
    name: &'a str,
    currency: &'a str,
    balance: String,
}

/// Writes the registry's account states to a CSV writer.
///
/// The output includes a header row: `id,name,currency,balance`. The
/// registry iterates in id order, so output is deterministic without extra
/// sorting. Balances are written as exact decimal strings, never floats.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use asset_ledger::domain::{currency::Currency, registry::AssetRegistry};
/// use asset_ledger::io::writer::write_accounts;
///
/// let mut registry = AssetRegistry::new();
/// registry.create_account("checking", Currency::Euro);
///
/// let mut out = Vec::new();
/// write_accounts(&mut out, &registry).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("id,name,currency,balance\n"));
/// assert!(s.contains("0,checking,Euro,0"));
/// ```
pub fn write_accounts<W: Write>(writer: W, registry: &AssetRegistry) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for account in registry.accounts() {
        let row = OutputRow {
            id: account.id(),
            name: account.name(),
            currency: account.currency().name(),
            balance: account.balance().to_string(),
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
