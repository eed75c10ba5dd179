use crate::{common::money::Money, domain::transaction::Transaction};
use chrono::NaiveDate;
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the input headers. The
/// description field may be left blank.
struct CsvRow {
    name: String,
    description: Option<String>,
    account: u32,
    date: String,
    amount: String,
}

/// Reads and validates transaction rows from a CSV reader.
///
/// Supported headers: `name,description,account,date,amount`. Dates are
/// ISO-8601 calendar dates, amounts exact decimal strings; a blank
/// description becomes `None`. Errors carry account/date context so a bad
/// row in a large statement can be located.
///
/// # Examples
///
/// ```
/// use asset_ledger::io::reader::read_transactions;
/// use csv::ReaderBuilder;
///
/// let data = "name,description,account,date,amount\n\
/// salary,,0,2024-01-01,1000.00\n\
/// rent,january,0,2024-01-02,-500.00\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let txs: Vec<_> = read_transactions(&mut rdr).collect();
///
/// assert_eq!(txs.len(), 2);
/// assert!(txs.iter().all(|t| t.is_ok()));
/// ```
pub fn read_transactions<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<Transaction, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;

        let date = NaiveDate::from_str(row.date.trim()).map_err(|e| {
            format!(
                "bad date {:?} for account {} ({e})",
                row.date, row.account
            )
        })?;
        let amount = Money::from_str(&row.amount).map_err(|e| {
            format!(
                "bad amount {:?} for account {} on {date} ({e})",
                row.amount, row.account
            )
        })?;

        // Blank or whitespace-only descriptions collapse to None.
        let description = row
            .description
            .map(|d| d.trim().to_owned())
            .filter(|d| !d.is_empty());

        Ok(Transaction {
            name: row.name,
            description,
            account_id: row.account,
            date,
            amount,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper: parse CSV input into collected transactions for assertions.
    fn collect_rows(input: &str) -> Vec<Result<Transaction, String>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(input.as_bytes());
        read_transactions(&mut reader).collect()
    }

    #[test]
    fn parses_rows_with_and_without_description() {
        let data = "name,description,account,date,amount\n\
salary,,0,2024-01-01,1000.00\nrent,january rent,0,2024-01-02,-500.00\n";
        let rows = collect_rows(data);

        assert_eq!(rows.len(), 2);

        let salary = rows[0].as_ref().unwrap();
        assert_eq!(salary.name, "salary");
        assert_eq!(salary.description, None);
        assert_eq!(salary.account_id, 0);
        assert_eq!(salary.date, NaiveDate::from_str("2024-01-01").unwrap());
        assert_eq!(salary.amount, Money::from_str("1000.00").unwrap());

        let rent = rows[1].as_ref().unwrap();
        assert_eq!(rent.description.as_deref(), Some("january rent"));
        assert_eq!(rent.amount, Money::from_str("-500.00").unwrap());
    }

    #[test]
    fn reports_bad_date_with_context() {
        let data = "name,description,account,date,amount\n\
salary,,3,01/02/2024,1.00\n";
        let rows = collect_rows(data);

        let err = rows.into_iter().next().unwrap().unwrap_err();
        assert!(err.contains("01/02/2024"));
        assert!(err.contains("account 3"));
    }

    #[test]
    fn reports_bad_amount_with_context() {
        let data = "name,description,account,date,amount\n\
salary,,3,2024-01-01,ten\n";
        let rows = collect_rows(data);

        let err = rows.into_iter().next().unwrap().unwrap_err();
        assert!(err.contains("\"ten\""));
        assert!(err.contains("account 3"));
    }

    #[test]
    fn rejects_empty_amount() {
        let data = "name,description,account,date,amount\n\
salary,,0,2024-01-01,\n";
        let rows = collect_rows(data);

        assert!(rows.into_iter().next().unwrap().is_err());
    }
}
