//! Ledger input types owned by the caller

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[serde(alias = "INCOME")]
    Income,
    #[serde(alias = "EXPENSE")]
    Expense,
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// Always positive; direction comes from `transaction_type`
    pub amount: Decimal,
    pub category_id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        amount: Decimal,
        category_id: impl Into<String>,
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            category_id: category_id.into(),
            transaction_type,
            date: None,
        }
    }

    pub fn expense(id: impl Into<String>, amount: Decimal, category_id: impl Into<String>) -> Self {
        Self::new(id, amount, category_id, TransactionType::Expense)
    }

    pub fn income(id: impl Into<String>, amount: Decimal, category_id: impl Into<String>) -> Self {
        Self::new(id, amount, category_id, TransactionType::Income)
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}

/// Spending category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Transactions plus the categories they reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub categories: Vec<Category>,
}
