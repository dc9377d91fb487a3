//! Imported transactions and manual expenses shown as one list.

use chrono::{Datelike, NaiveDate};

use crate::api::types::{CategoryTotal, Expense, ExpenseType, StoredTransaction};
use crate::locale::category_icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Csv,
    Manual,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LedgerEntry {
    pub id: Option<String>,
    pub date: String,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub source: Source,
    pub expense_type: ExpenseType,
}

impl LedgerEntry {
    fn from_transaction(tx: &StoredTransaction) -> Self {
        LedgerEntry {
            id: tx.id.clone(),
            date: tx.date.clone(),
            amount: tx.amount,
            category: tx.category.clone(),
            description: tx.description().unwrap_or(&tx.category).to_string(),
            source: Source::Csv,
            expense_type: ExpenseType::OneTime,
        }
    }

    fn from_expense(expense: &Expense) -> Self {
        LedgerEntry {
            id: Some(expense.id.clone()),
            date: expense.date.clone(),
            amount: expense.amount,
            category: expense.category.clone(),
            description: expense
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(&expense.category)
                .to_string(),
            source: Source::Manual,
            expense_type: expense.expense_type,
        }
    }
}

/// Leading `YYYY-MM-DD` of a date or timestamp.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let day = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Newest first; undated entries go last, ties keep their order.
fn sort_newest_first(entries: &mut [LedgerEntry]) {
    entries.sort_by(|a, b| parse_date(&b.date).cmp(&parse_date(&a.date)));
}

/// Dashboard feed: imported transactions keep their sign, manual expenses are
/// always outflows.
pub fn merge_activity(transactions: &[StoredTransaction], expenses: &[Expense]) -> Vec<LedgerEntry> {
    let mut entries: Vec<LedgerEntry> = transactions
        .iter()
        .map(LedgerEntry::from_transaction)
        .chain(expenses.iter().map(|e| {
            let mut entry = LedgerEntry::from_expense(e);
            entry.amount = -entry.amount.abs();
            entry
        }))
        .collect();
    sort_newest_first(&mut entries);
    entries
}

/// Expenses page list for `month` (`YYYY-MM`): manual expenses plus the
/// imported outflows dated in that month, all as positive amounts.
pub fn month_expenses(month: &str, expenses: &[Expense], transactions: &[StoredTransaction]) -> Vec<LedgerEntry> {
    let target = month_key(month);
    let imported = transactions
        .iter()
        .filter(|tx| tx.amount < 0.0)
        .filter(|tx| {
            target.is_some() && parse_date(&tx.date).map(|d| (d.year(), d.month())) == target
        })
        .map(|tx| {
            let mut entry = LedgerEntry::from_transaction(tx);
            entry.amount = entry.amount.abs();
            if entry.category.is_empty() {
                entry.category = "Other".to_string();
            }
            if entry.description.is_empty() {
                entry.description = "Transaction".to_string();
            }
            entry
        });

    let mut entries: Vec<LedgerEntry> = expenses
        .iter()
        .map(|e| {
            let mut entry = LedgerEntry::from_expense(e);
            entry.amount = entry.amount.abs();
            entry
        })
        .chain(imported)
        .collect();
    sort_newest_first(&mut entries);
    entries
}

fn month_key(month: &str) -> Option<(i32, u32)> {
    let (year, month) = month.split_once('-')?;
    Some((year.parse().ok()?, month.parse().ok()?))
}

pub fn manual_total(entries: &[LedgerEntry]) -> f64 {
    entries
        .iter()
        .filter(|e| e.source == Source::Manual)
        .map(|e| e.amount)
        .sum()
}

#[derive(Clone, Debug, PartialEq)]
pub struct BreakdownItem {
    pub category: String,
    pub total: f64,
    pub icon: &'static str,
}

/// The dashboard's three budget tiles: the two biggest categories and
/// everything else as "Others", padded with empty "Others" tiles.
pub fn category_breakdown(categories: &[CategoryTotal]) -> Vec<BreakdownItem> {
    let others = |total: f64| BreakdownItem {
        category: "Others".to_string(),
        total,
        icon: category_icon("Others"),
    };

    let mut sorted: Vec<&CategoryTotal> = categories.iter().filter(|c| c.total > 0.0).collect();
    sorted.sort_by(|a, b| b.total.total_cmp(&a.total));

    let all: f64 = sorted.iter().map(|c| c.total).sum();
    let mut items: Vec<BreakdownItem> = sorted
        .iter()
        .take(2)
        .map(|c| BreakdownItem {
            category: c.category.clone(),
            total: c.total,
            icon: category_icon(&c.category),
        })
        .collect();
    let top: f64 = items.iter().map(|i| i.total).sum();
    items.push(others((all - top).max(0.0)));
    while items.len() < 3 {
        items.insert(0, others(0.0));
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(date: &str, amount: f64, category: &str, description: Option<&str>) -> StoredTransaction {
        StoredTransaction {
            id: Some(format!("tx-{date}")),
            date: date.to_string(),
            amount,
            category: category.to_string(),
            metadata: description.map(|d| {
                [("description".to_string(), serde_json::Value::String(d.to_string()))]
                    .into_iter()
                    .collect()
            }),
            created_at: None,
        }
    }

    fn expense(id: &str, date: &str, amount: f64) -> Expense {
        Expense {
            id: id.to_string(),
            date: date.to_string(),
            amount,
            category: "Groceries & Food".to_string(),
            description: None,
            expense_type: ExpenseType::Daily,
        }
    }

    #[test]
    fn test_merge_activity_newest_first() {
        let transactions = vec![
            tx("2025-01-05", 3000.0, "Salary", None),
            tx("2025-01-20", -40.0, "Food", Some("Lunch")),
        ];
        let expenses = vec![expense("e1", "2025-01-10", 250.0)];
        let merged = merge_activity(&transactions, &expenses);

        let dates: Vec<&str> = merged.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-01-20", "2025-01-10", "2025-01-05"]);
        assert_eq!(merged[0].description, "Lunch");
        assert_eq!(merged[1].amount, -250.0);
        assert_eq!(merged[1].source, Source::Manual);
        assert_eq!(merged[1].description, "Groceries & Food");
        assert_eq!(merged[2].description, "Salary");
    }

    #[test]
    fn test_undated_entries_sort_last() {
        let transactions = vec![tx("", -1.0, "Food", None), tx("2024-12-31T10:00:00", -2.0, "Food", None)];
        let merged = merge_activity(&transactions, &[]);
        assert_eq!(merged[0].amount, -2.0);
        assert_eq!(merged[1].date, "");
    }

    #[test]
    fn test_month_expenses_filters_imported_outflows() {
        let transactions = vec![
            tx("2025-02-03", -80.0, "Food", None),
            tx("2025-02-04", 500.0, "Refund", None),
            tx("2025-03-01", -10.0, "Food", None),
            tx("2025-02-10", -15.0, "", None),
        ];
        let expenses = vec![expense("e1", "2025-02-07", -30.0)];
        let entries = month_expenses("2025-02", &expenses, &transactions);

        let amounts: Vec<f64> = entries.iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![15.0, 30.0, 80.0]);
        assert_eq!(entries[0].category, "Other");
        assert_eq!(entries[0].description, "Transaction");
        assert_eq!(manual_total(&entries), 30.0);
    }

    #[test]
    fn test_category_breakdown() {
        let categories = vec![
            CategoryTotal {
                category: "Shopping".to_string(),
                total: 400.0,
            },
            CategoryTotal {
                category: "Food".to_string(),
                total: 900.0,
            },
            CategoryTotal {
                category: "Rent".to_string(),
                total: 100.0,
            },
        ];
        let items = category_breakdown(&categories);
        let names: Vec<&str> = items.iter().map(|i| i.category.as_str()).collect();
        assert_eq!(names, vec!["Food", "Shopping", "Others"]);
        assert_eq!(items[2].total, 100.0);

        let padded = category_breakdown(&categories[..1]);
        assert_eq!(padded.len(), 3);
        assert_eq!(padded[0].category, "Others");
        assert_eq!(padded[1].category, "Shopping");
    }
}
