use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Columns every import file must carry. Anything else becomes metadata.
pub const REQUIRED_COLUMNS: [&str; 3] = ["date", "amount", "category"];

/// The import could not produce any transactions.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("CSV file must have at least a header and one data row")]
    TooFewRows,

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("No valid transactions found in CSV")]
    NoValidTransactions { errors: Vec<RowError> },

    #[error("CSV header could not be read")]
    MalformedHeader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowProblem {
    MalformedQuotes,
    EmptyDate,
    InvalidAmount,
    ZeroAmount,
    EmptyCategory,
}

impl fmt::Display for RowProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowProblem::MalformedQuotes => write!(f, "Malformed quoted field"),
            RowProblem::EmptyDate => write!(f, "Date cannot be empty"),
            RowProblem::InvalidAmount => write!(f, "Invalid amount"),
            RowProblem::ZeroAmount => write!(f, "Amount cannot be zero"),
            RowProblem::EmptyCategory => write!(f, "Category cannot be empty"),
        }
    }
}

/// A skipped row. `row` counts non-blank lines from 1, so the header is row 1
/// and the first data row is row 2.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Row {row}: {problem}")]
pub struct RowError {
    pub row: usize,
    pub problem: RowProblem,
}

/// One imported financial movement. Negative amounts are expenses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    pub date: String,
    pub amount: f64,
    pub category: String,
    pub metadata: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CsvImport {
    pub transactions: Vec<TransactionRecord>,
    pub errors: Vec<RowError>,
}

impl CsvImport {
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}

/// Parses the text of an uploaded CSV file into transaction records.
///
/// Rows that break a validation rule are skipped and reported in
/// [`CsvImport::errors`]. The whole import fails only when there are no data
/// rows, the header is unreadable or lacks a required column, or every row
/// was rejected. Each line is tokenised on its own, so row numbers always
/// match non-blank lines.
pub fn parse_transactions(text: &str) -> Result<CsvImport, FormatError> {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Err(FormatError::TooFewRows);
    }

    let headers: Vec<String> = split_line(lines[0])
        .map_err(|_| FormatError::MalformedHeader)?
        .iter()
        .map(str::to_string)
        .collect();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h.as_str() == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(FormatError::MissingColumns(missing));
    }

    let mut transactions = Vec::new();
    let mut errors = Vec::new();
    for (index, line) in lines.iter().enumerate().skip(1) {
        let parsed = split_line(line).and_then(|row| {
            let cells: Vec<&str> = (0..headers.len()).map(|i| row.get(i).unwrap_or("")).collect();
            validate_row(&headers, &cells)
        });
        match parsed {
            Ok(record) => transactions.push(record),
            Err(problem) => errors.push(RowError {
                row: index + 1,
                problem,
            }),
        }
    }

    if transactions.is_empty() {
        log::warn!("csv import rejected all {} rows", errors.len());
        return Err(FormatError::NoValidTransactions { errors });
    }
    log::debug!(
        "csv import accepted {} rows, skipped {}",
        transactions.len(),
        errors.len()
    );
    Ok(CsvImport {
        transactions,
        errors,
    })
}

/// Tokenises one line. A quoted field never continues onto the next line.
fn split_line(line: &str) -> Result<csv::StringRecord, RowProblem> {
    if line.matches('"').count() % 2 != 0 {
        return Err(RowProblem::MalformedQuotes);
    }
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // short rows read missing cells as empty
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());
    let mut records = reader.records();
    let record = match records.next() {
        Some(Ok(record)) => record,
        _ => return Err(RowProblem::MalformedQuotes),
    };
    // a stray carriage return would start a second record
    if records.next().is_some() || record.iter().any(|field| field.contains(|c: char| c == '\n' || c == '\r')) {
        return Err(RowProblem::MalformedQuotes);
    }
    Ok(record)
}

fn validate_row(headers: &[String], cells: &[&str]) -> Result<TransactionRecord, RowProblem> {
    let cell = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .and_then(|i| cells.get(i).copied())
            .unwrap_or("")
    };

    let date = cell("date");
    if date.is_empty() {
        return Err(RowProblem::EmptyDate);
    }
    let amount = parse_amount(cell("amount")).ok_or(RowProblem::InvalidAmount)?;
    if amount == 0.0 {
        return Err(RowProblem::ZeroAmount);
    }
    let category = cell("category").trim();
    if category.is_empty() {
        return Err(RowProblem::EmptyCategory);
    }

    let metadata = headers
        .iter()
        .zip(cells.iter())
        .filter(|(header, value)| !REQUIRED_COLUMNS.contains(&header.as_str()) && !value.is_empty())
        .map(|(header, value)| (header.clone(), value.to_string()))
        .collect();

    Ok(TransactionRecord {
        date: date.to_string(),
        amount,
        category: category.to_string(),
        metadata,
    })
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|amount| amount.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_rows_and_reports_zero_amount() {
        let input = "date,amount,category\n2024-01-15,-25.50,Food\n2024-01-16,0,Transport\n";
        let import = parse_transactions(input).expect("import should succeed");

        assert_eq!(
            import.transactions,
            vec![TransactionRecord {
                date: "2024-01-15".to_string(),
                amount: -25.5,
                category: "Food".to_string(),
                metadata: BTreeMap::new(),
            }]
        );
        assert_eq!(import.error_messages(), vec!["Row 3: Amount cannot be zero"]);
    }

    #[test]
    fn test_missing_category_column() {
        let err = parse_transactions("date,amount\n2024-01-01,10\n").unwrap_err();
        match &err {
            FormatError::MissingColumns(columns) => assert_eq!(columns, &vec!["category".to_string()]),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.to_string(), "Missing required columns: category");
    }

    #[test]
    fn test_missing_amount_column_fails_regardless_of_rows() {
        let input = "date,category,amount_usd\n2024-01-01,Food,12\n2024-01-02,Rent,900\n";
        assert!(matches!(
            parse_transactions(input),
            Err(FormatError::MissingColumns(columns)) if columns == vec!["amount".to_string()]
        ));
    }

    #[test]
    fn test_header_only_is_too_few_rows() {
        assert!(matches!(
            parse_transactions("date,amount,category\n\n   \n"),
            Err(FormatError::TooFewRows)
        ));
        assert!(matches!(parse_transactions(""), Err(FormatError::TooFewRows)));
    }

    #[test]
    fn test_all_zero_amounts_fail() {
        let input = "date,amount,category\n2024-01-01,0,Food\n2024-01-02,0.00,Rent\n";
        let err = parse_transactions(input).unwrap_err();
        assert_eq!(err.to_string(), "No valid transactions found in CSV");
        match err {
            FormatError::NoValidTransactions { errors } => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_row_rules_in_order() {
        let input = "\
date,amount,category
,10,Food
2024-01-02,abc,Food
2024-01-03,,Food
2024-01-04,5,
2024-01-05,7,  Rent
";
        let import = parse_transactions(input).expect("one row is valid");
        assert_eq!(
            import.error_messages(),
            vec![
                "Row 2: Date cannot be empty",
                "Row 3: Invalid amount",
                "Row 4: Invalid amount",
                "Row 5: Category cannot be empty",
            ]
        );
        assert_eq!(import.transactions.len(), 1);
        assert_eq!(import.transactions[0].category, "Rent");
    }

    #[test]
    fn test_blank_lines_do_not_count_as_rows() {
        let input = "date,amount,category\n\n2024-01-01,5,Food\n\n2024-01-02,0,Food\n";
        let import = parse_transactions(input).expect("import should succeed");
        assert_eq!(import.error_messages(), vec!["Row 3: Amount cannot be zero"]);
    }

    #[test]
    fn test_extra_columns_become_metadata() {
        let input = "date,amount,category,description,merchant\n\
                     2024-01-15,-25.50,Food,Grocery shopping,\n";
        let import = parse_transactions(input).expect("import should succeed");
        let metadata = &import.transactions[0].metadata;
        assert_eq!(metadata.get("description").map(String::as_str), Some("Grocery shopping"));
        // empty values are not carried over
        assert!(!metadata.contains_key("merchant"));
    }

    #[test]
    fn test_non_finite_amounts_are_invalid() {
        let input = "date,amount,category\n2024-01-01,NaN,Food\n2024-01-02,inf,Food\n2024-01-03,1e2,Food\n";
        let import = parse_transactions(input).expect("one row is valid");
        assert_eq!(import.errors.len(), 2);
        assert_eq!(import.transactions[0].amount, 100.0);
    }

    #[test]
    fn test_quoted_comma_stays_in_one_field() {
        let input = "date,amount,category,description\n\
                     2024-01-15,-25.50,Food,\"Groceries, weekly\"\n\
                     2024-01-16,-4,Food,\"Said \"\"hi\"\"\"\n";
        let import = parse_transactions(input).expect("import should succeed");
        assert!(import.errors.is_empty());
        let descriptions: Vec<_> = import
            .transactions
            .iter()
            .map(|t| t.metadata.get("description").cloned().unwrap_or_default())
            .collect();
        assert_eq!(descriptions, vec!["Groceries, weekly", "Said \"hi\""]);
    }

    #[test]
    fn test_unterminated_quote_only_costs_its_own_row() {
        let input = "date,amount,category\n2024-01-01,5,\"Food\n2024-01-02,6,Rent\n2024-01-03,7,Fuel\n";
        let import = parse_transactions(input).expect("later rows are valid");
        assert_eq!(import.error_messages(), vec!["Row 2: Malformed quoted field"]);
        let categories: Vec<_> = import.transactions.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(categories, vec!["Rent", "Fuel"]);
    }

    #[test]
    fn test_rows_are_numbered_by_line_after_a_multiline_value() {
        let input = "date,amount,category,note\n\
                     2024-01-01,5,Food,\"a\n\
                     b\"\n\
                     2024-01-02,0,Rent,x\n\
                     2024-01-03,9,Fuel,y\n";
        let import = parse_transactions(input).expect("last row is valid");
        assert_eq!(
            import.error_messages(),
            vec![
                "Row 2: Malformed quoted field",
                "Row 3: Malformed quoted field",
                "Row 4: Amount cannot be zero",
            ]
        );
        assert_eq!(import.transactions.len(), 1);
        assert!(import.transactions.iter().all(|t| !t.category.contains('\n')));
    }

    #[test]
    fn test_stray_carriage_return_is_rejected() {
        let input = "date,amount,category\n2024-01-01,5,Food\r2024-01-02,6,Rent\n2024-01-03,7,Fuel\n";
        let import = parse_transactions(input).expect("last row is valid");
        assert_eq!(import.error_messages(), vec!["Row 2: Malformed quoted field"]);
        assert_eq!(import.transactions.len(), 1);
    }

    #[test]
    fn test_malformed_header() {
        let err = parse_transactions("date,\"amount,category\n2024-01-01,5,Food\n").unwrap_err();
        assert!(matches!(err, FormatError::MalformedHeader));
    }

    #[test]
    fn test_windows_line_endings() {
        let input = "date,amount,category\r\n2024-01-01,1500.00,Income\r\n";
        let import = parse_transactions(input).expect("import should succeed");
        assert_eq!(import.transactions[0].amount, 1500.0);
        assert_eq!(import.transactions[0].category, "Income");
    }
}
