pub mod reader;
pub mod writer;

use std::io::Read;

use crate::common::error::LedgerError;
use crate::domain::ledger::Ledger;

/// Imports a CSV statement into the ledger.
///
/// Every row must reference an already-registered account. Duplicate rows
/// are skipped, matching [`Ledger::add_transaction`]; the count of
/// transactions actually applied is returned.
pub fn import_transactions<R: Read>(
    ledger: &mut Ledger,
    rdr: &mut csv::Reader<R>,
) -> Result<usize, LedgerError> {
    let mut imported = 0;
    for row in reader::read_transactions(rdr) {
        let tx = row.map_err(LedgerError::Parse)?;
        if ledger.add_transaction(tx)? {
            imported += 1;
        }
    }
    Ok(imported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::currency::Currency;

    fn csv_reader(input: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(input.as_bytes())
    }

    #[test]
    fn imports_rows_and_skips_duplicates() {
        let mut ledger = Ledger::new();
        ledger.assets_mut().create_account("checking", Currency::Euro);

        let data = "name,description,account,date,amount\n\
salary,,0,2024-01-01,1000.00\nsalary,,0,2024-01-01,1000.00\n";
        let imported = import_transactions(&mut ledger, &mut csv_reader(data)).unwrap();

        assert_eq!(imported, 1);
        assert_eq!(
            ledger.assets().account(0).unwrap().balance().to_string(),
            "1000.00"
        );
    }

    #[test]
    fn bad_row_aborts_with_parse_error() {
        let mut ledger = Ledger::new();
        ledger.assets_mut().create_account("checking", Currency::Euro);

        let data = "name,description,account,date,amount\n\
salary,,0,not-a-date,1000.00\n";
        let err = import_transactions(&mut ledger, &mut csv_reader(data)).unwrap_err();
        assert!(matches!(err, LedgerError::Parse(_)));
    }

    #[test]
    fn unregistered_account_aborts_with_unknown_account() {
        let mut ledger = Ledger::new();

        let data = "name,description,account,date,amount\n\
salary,,9,2024-01-01,1000.00\n";
        let err = import_transactions(&mut ledger, &mut csv_reader(data)).unwrap_err();
        assert!(matches!(err, LedgerError::UnknownAccount(9)));
    }
}
