//! Indian locale: rupee formatting, lakh/crore abbreviations, dates and the
//! expense category catalogue shown in forms.

use chrono::{Local, NaiveDate};

pub const CURRENCY_SYMBOL: &str = "₹";

const LAKH: f64 = 100_000.0;
const CRORE: f64 = 10_000_000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExpenseCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

pub const EXPENSE_CATEGORIES: [ExpenseCategory; 15] = [
    ExpenseCategory { id: "groceries", name: "Groceries & Food", icon: "🛒" },
    ExpenseCategory { id: "rent", name: "Rent/EMI", icon: "🏠" },
    ExpenseCategory { id: "utilities", name: "Electricity & Bills", icon: "⚡" },
    ExpenseCategory { id: "transport", name: "Transport/Petrol", icon: "🚗" },
    ExpenseCategory { id: "dining", name: "Dining Out/Zomato", icon: "🍽️" },
    ExpenseCategory { id: "entertainment", name: "Entertainment/OTT", icon: "🎬" },
    ExpenseCategory { id: "shopping", name: "Shopping/Online", icon: "🛍️" },
    ExpenseCategory { id: "education", name: "Education/Tuition", icon: "📚" },
    ExpenseCategory { id: "healthcare", name: "Medical/Healthcare", icon: "🏥" },
    ExpenseCategory { id: "insurance", name: "Insurance Premium", icon: "🛡️" },
    ExpenseCategory { id: "investments", name: "SIP/Investments", icon: "📈" },
    ExpenseCategory { id: "mobile", name: "Mobile/Internet", icon: "📱" },
    ExpenseCategory { id: "domestic", name: "Domestic Help", icon: "👨‍🍳" },
    ExpenseCategory { id: "personal", name: "Personal Care", icon: "💇" },
    ExpenseCategory { id: "other", name: "Other", icon: "📝" },
];

pub fn default_expense_category() -> &'static str {
    EXPENSE_CATEGORIES[0].name
}

/// Icon for a transaction category as it appears in imported data.
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Food" => "🍽️",
        "Groceries" => "🛒",
        "Transportation" => "🚗",
        "Entertainment" => "🎬",
        "Shopping" => "🛍️",
        "Healthcare" => "🏥",
        "Education" => "📚",
        "Bills" => "⚡",
        "Utilities" => "💡",
        "Rent" => "🏠",
        "Gas" => "⛽",
        "Other" => "📝",
        _ => "💰",
    }
}

/// Groups the integer digits the Indian way: the last three digits, then pairs.
/// `1234567` becomes `12,34,567`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let head = head.chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in head.iter().enumerate() {
        if i > 0 && i % 2 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    let grouped: String = out.into_iter().rev().collect();
    format!("{},{}", grouped, tail)
}

/// `₹` followed by the amount with Indian grouping and at most two decimals.
/// Trailing zero decimals are dropped, so `1500.0` renders as `₹1,500`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{}0", CURRENCY_SYMBOL);
    }
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');
    let grouped = group_indian(int_part);

    // -0.001 rounds to "0.00"; don't print a sign for it
    let sign = if amount < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        "-"
    } else {
        ""
    };
    if frac_part.is_empty() {
        format!("{}{}{}", sign, CURRENCY_SYMBOL, grouped)
    } else {
        format!("{}{}{}.{}", sign, CURRENCY_SYMBOL, grouped, frac_part)
    }
}

/// Compact form for big numbers: crores above one crore, lakhs above one lakh.
pub fn format_large(amount: f64) -> String {
    if amount >= CRORE {
        format!("{}{} Cr", CURRENCY_SYMBOL, to_crores(amount))
    } else if amount >= LAKH {
        format!("{}{} L", CURRENCY_SYMBOL, to_lakhs(amount))
    } else {
        format_currency(amount)
    }
}

pub fn to_lakhs(amount: f64) -> String {
    format!("{:.2}", amount / LAKH)
}

pub fn to_crores(amount: f64) -> String {
    format!("{:.2}", amount / CRORE)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `YYYY-MM`, the month key the backend groups by.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// `YYYY-MM-DD` for date inputs and request bodies.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `16 October 2026`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// `Oct 2026` for a `YYYY-MM` key; the key itself when it doesn't parse.
pub fn month_label(month: &str) -> String {
    NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d")
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|_| month.to_string())
}

/// `Oct 16` for anything starting with `YYYY-MM-DD`.
pub fn short_date(date: &str) -> String {
    date.get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map(|d| d.format("%b %-d").to_string())
        .unwrap_or_else(|| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "₹0");
        assert_eq!(format_currency(999.0), "₹999");
        assert_eq!(format_currency(1500.0), "₹1,500");
        assert_eq!(format_currency(100000.0), "₹1,00,000");
        assert_eq!(format_currency(12345678.9), "₹1,23,45,678.9");
        assert_eq!(format_currency(25.5), "₹25.5");
        assert_eq!(format_currency(-25.5), "-₹25.5");
        assert_eq!(format_currency(0.126), "₹0.13");
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN), "₹0");
        assert_eq!(format_currency(f64::INFINITY), "₹0");
        assert_eq!(format_currency(-0.001), "₹0");
    }

    #[test]
    fn test_format_large() {
        assert_eq!(format_large(25_000_000.0), "₹2.50 Cr");
        assert_eq!(format_large(10_000_000.0), "₹1.00 Cr");
        assert_eq!(format_large(250_000.0), "₹2.50 L");
        assert_eq!(format_large(99_999.0), "₹99,999");
    }

    #[test]
    fn test_lakhs_and_crores() {
        assert_eq!(to_lakhs(150_000.0), "1.50");
        assert_eq!(to_crores(5_000_000.0), "0.50");
    }

    #[test]
    fn test_date_formats() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).expect("valid date");
        assert_eq!(month_key(date), "2025-03");
        assert_eq!(date_key(date), "2025-03-07");
        assert_eq!(long_date(date), "7 March 2025");
        assert_eq!(month_label("2025-03"), "Mar 2025");
        assert_eq!(short_date("2025-03-07T10:00:00"), "Mar 7");
    }

    #[test]
    fn test_unparseable_dates_pass_through() {
        assert_eq!(month_label("soon"), "soon");
        assert_eq!(short_date(""), "");
    }

    #[test]
    fn test_category_icon_fallback() {
        assert_eq!(category_icon("Food"), "🍽️");
        assert_eq!(category_icon("Crypto"), "💰");
    }
}
