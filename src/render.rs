//! List Projection
//!
//! Turns the stored transactions into display rows. The list component
//! rebuilds every row from this on each change.

use std::fmt::Display;

use chrono::TimeZone;

use crate::models::{Kind, Transaction};

/// Shown when a transaction has no category
pub const CATEGORY_PLACEHOLDER: &str = "N/A";
/// Shown when a stored timestamp is out of range
pub const DATE_PLACEHOLDER: &str = "Unknown date";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Positive => "amount amount-income",
            Tone::Negative => "amount amount-expense",
        }
    }
}

impl From<Kind> for Tone {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Income => Tone::Positive,
            Kind::Expense => Tone::Negative,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub name: String,
    pub category: String,
    pub date: String,
    pub amount: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub rows: Vec<Row>,
    /// More rows than the compact layout holds
    pub expanded: bool,
}

impl ListView {
    /// Each date is shown in `tz` at that transaction's own instant, so DST
    /// changes never shift an older entry's day.
    pub fn project<Tz>(transactions: &[Transaction], tz: &Tz, expanded_after: usize) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let rows = transactions
            .iter()
            .map(|t| Row {
                name: t.name.clone(),
                category: t
                    .category
                    .clone()
                    .unwrap_or_else(|| CATEGORY_PLACEHOLDER.to_string()),
                date: format_date(t.created_at, tz),
                amount: format_signed(t.amount, t.kind),
                tone: t.kind.into(),
            })
            .collect::<Vec<_>>();
        let expanded = rows.len() > expanded_after;
        Self { rows, expanded }
    }

    pub fn container_class(&self) -> &'static str {
        if self.expanded {
            "transaction-list expanded"
        } else {
            "transaction-list"
        }
    }
}

/// Income and expense totals
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub income: f64,
    pub expense: f64,
}

impl Summary {
    pub fn of(transactions: &[Transaction]) -> Self {
        transactions.iter().fold(Summary::default(), |mut acc, t| {
            match t.kind {
                Kind::Income => acc.income += t.amount,
                Kind::Expense => acc.expense += t.amount,
            }
            acc
        })
    }

    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }
}

pub fn format_date<Tz>(created_at: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tz.timestamp_millis_opt(created_at).single() {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => DATE_PLACEHOLDER.to_string(),
    }
}

/// `+1,234.50` for income, `-1,234.50` for expense
pub fn format_signed(amount: f64, kind: Kind) -> String {
    let sign = match kind {
        Kind::Income => "+",
        Kind::Expense => "-",
    };
    format!("{}{}", sign, format_amount(amount.abs()))
}

/// Running balance; zero carries no sign
pub fn format_balance(balance: f64) -> String {
    let amount = format_amount(balance.abs());
    if amount == "0.00" {
        amount
    } else if balance < 0.0 {
        format!("-{}", amount)
    } else {
        format!("+{}", amount)
    }
}

/// Non-negative amount with two decimals and comma thousands separators
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount);
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{}.{}", grouped, cents)
}
