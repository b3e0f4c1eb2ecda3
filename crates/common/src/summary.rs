//! Expense aggregation and category ranking

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::InsightError;
use crate::format::format_vnd_amount;
use crate::model::{Category, Transaction};

/// Minimum number of expense transactions before an insight is attempted
pub const MIN_EXPENSE_COUNT: usize = 5;

/// Number of categories mentioned in the prompt
pub const TOP_CATEGORY_COUNT: usize = 3;

/// Cumulative spend for one category name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySpend {
    pub name: String,
    pub amount: Decimal,
}

/// Aggregated view of a set of expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpendingSummary {
    pub expense_count: usize,
    /// Includes expenses whose category could not be resolved
    pub total_expense: Decimal,
    /// Ranked by amount descending, ties in first-seen order
    pub categories: Vec<CategorySpend>,
    /// Expenses whose `category_id` matched no known category
    pub uncategorized_count: usize,
}

/// Keep only expense transactions
pub fn expenses(transactions: &[Transaction]) -> Vec<&Transaction> {
    transactions.iter().filter(|t| t.is_expense()).collect()
}

/// Sum expenses per category name in first-seen order.
///
/// Returns the per-category totals and the number of expenses whose
/// category could not be resolved. Those are skipped without error.
pub fn category_spend(
    expenses: &[&Transaction],
    categories: &[Category],
) -> Result<(Vec<CategorySpend>, usize), InsightError> {
    let mut spend: Vec<CategorySpend> = Vec::new();
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();
    let mut uncategorized = 0;

    for expense in expenses {
        let Some(category) = categories.iter().find(|c| c.id == expense.category_id) else {
            uncategorized += 1;
            continue;
        };

        match index_by_name.get(category.name.as_str()) {
            Some(&idx) => {
                let entry = &mut spend[idx];
                entry.amount = entry
                    .amount
                    .checked_add(expense.amount)
                    .ok_or(InsightError::AmountOverflow)?;
            }
            None => {
                index_by_name.insert(category.name.as_str(), spend.len());
                spend.push(CategorySpend {
                    name: category.name.clone(),
                    amount: expense.amount,
                });
            }
        }
    }

    Ok((spend, uncategorized))
}

/// Sum of all amounts, or `AmountOverflow` past `Decimal::MAX`
pub fn total_amount(expenses: &[&Transaction]) -> Result<Decimal, InsightError> {
    expenses.iter().try_fold(Decimal::ZERO, |acc, t| {
        acc.checked_add(t.amount).ok_or(InsightError::AmountOverflow)
    })
}

/// Sort by amount descending; the sort is stable so ties keep their order
pub fn rank_categories(mut spend: Vec<CategorySpend>) -> Vec<CategorySpend> {
    spend.sort_by(|a, b| b.amount.cmp(&a.amount));
    spend
}

impl SpendingSummary {
    /// Aggregate already-filtered expenses
    pub fn from_expenses(
        expenses: &[&Transaction],
        categories: &[Category],
    ) -> Result<Self, InsightError> {
        let total_expense = total_amount(expenses)?;
        let (spend, uncategorized_count) = category_spend(expenses, categories)?;

        Ok(Self {
            expense_count: expenses.len(),
            total_expense,
            categories: rank_categories(spend),
            uncategorized_count,
        })
    }

    /// Filter and aggregate a raw transaction list
    pub fn from_transactions(
        transactions: &[Transaction],
        categories: &[Category],
    ) -> Result<Self, InsightError> {
        Self::from_expenses(&expenses(transactions), categories)
    }

    pub fn top_categories(&self, n: usize) -> &[CategorySpend] {
        &self.categories[..n.min(self.categories.len())]
    }

    /// `"<name>: <amount> VND"` for the top categories, joined with `", "`
    pub fn top_categories_line(&self) -> String {
        self.top_categories(TOP_CATEGORY_COUNT)
            .iter()
            .map(|c| format!("{}: {} VND", c.name, format_vnd_amount(c.amount)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(n: i64) -> Decimal {
        Decimal::from(n)
    }

    fn categories() -> Vec<Category> {
        vec![
            Category::new("a", "A"),
            Category::new("b", "B"),
            Category::new("c", "C"),
            Category::new("d", "D"),
        ]
    }

    #[test]
    fn test_category_totals() {
        let txs = vec![
            Transaction::expense("1", d(100), "a"),
            Transaction::expense("2", d(50), "a"),
            Transaction::expense("3", d(30), "b"),
        ];
        let summary = SpendingSummary::from_transactions(&txs, &categories()).unwrap();

        assert_eq!(summary.total_expense, d(180));
        assert_eq!(
            summary.categories,
            vec![
                CategorySpend { name: "A".to_string(), amount: d(150) },
                CategorySpend { name: "B".to_string(), amount: d(30) },
            ]
        );
        assert_eq!(summary.uncategorized_count, 0);
    }

    #[test]
    fn test_unresolved_category_counts_in_total_only() {
        let txs = vec![
            Transaction::expense("1", d(100), "a"),
            Transaction::expense("2", d(70), "missing"),
        ];
        let summary = SpendingSummary::from_transactions(&txs, &categories()).unwrap();

        assert_eq!(summary.total_expense, d(170));
        assert_eq!(summary.categories.len(), 1);
        assert_eq!(summary.categories[0].amount, d(100));
        assert_eq!(summary.uncategorized_count, 1);
    }

    #[test]
    fn test_income_is_ignored() {
        let txs = vec![
            Transaction::expense("1", d(10), "a"),
            Transaction::income("2", d(5000), "a"),
        ];
        let summary = SpendingSummary::from_transactions(&txs, &categories()).unwrap();

        assert_eq!(summary.expense_count, 1);
        assert_eq!(summary.total_expense, d(10));
    }

    #[test]
    fn test_ranking_takes_top_three() {
        let txs = vec![
            Transaction::expense("1", d(10), "a"),
            Transaction::expense("2", d(100), "b"),
            Transaction::expense("3", d(50), "c"),
            Transaction::expense("4", d(5), "d"),
        ];
        let summary = SpendingSummary::from_transactions(&txs, &categories()).unwrap();

        assert_eq!(
            summary.top_categories_line(),
            "B: 100 VND, C: 50 VND, A: 10 VND"
        );
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let txs = vec![
            Transaction::expense("1", d(20), "c"),
            Transaction::expense("2", d(20), "a"),
            Transaction::expense("3", d(20), "b"),
        ];
        let summary = SpendingSummary::from_transactions(&txs, &categories()).unwrap();

        let names: Vec<_> = summary.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_duplicate_category_names_merge() {
        let cats = vec![Category::new("x1", "Food"), Category::new("x2", "Food")];
        let txs = vec![
            Transaction::expense("1", d(10), "x1"),
            Transaction::expense("2", d(15), "x2"),
        ];
        let summary = SpendingSummary::from_transactions(&txs, &cats).unwrap();

        assert_eq!(summary.categories.len(), 1);
        assert_eq!(summary.categories[0].amount, d(25));
    }

    #[test]
    fn test_first_matching_category_wins() {
        let cats = vec![Category::new("a", "First"), Category::new("a", "Second")];
        let txs = vec![Transaction::expense("1", d(10), "a")];
        let summary = SpendingSummary::from_transactions(&txs, &cats).unwrap();

        assert_eq!(summary.categories[0].name, "First");
    }

    #[test]
    fn test_amounts_use_vi_vn_grouping() {
        let txs = vec![Transaction::expense("1", d(1234567), "a")];
        let summary = SpendingSummary::from_transactions(&txs, &categories()).unwrap();

        assert_eq!(summary.top_categories_line(), "A: 1.234.567 VND");
    }

    #[test]
    fn test_overflowing_sums_are_errors() {
        let huge = Decimal::MAX - Decimal::ONE;
        let txs = vec![
            Transaction::expense("1", huge, "a"),
            Transaction::expense("2", huge, "a"),
        ];
        assert_eq!(
            SpendingSummary::from_transactions(&txs, &categories()),
            Err(InsightError::AmountOverflow)
        );

        let spread = vec![
            Transaction::expense("1", huge, "a"),
            Transaction::expense("2", huge, "b"),
        ];
        let refs: Vec<&Transaction> = spread.iter().collect();
        assert!(category_spend(&refs, &categories()).is_ok());
        assert_eq!(total_amount(&refs), Err(InsightError::AmountOverflow));
    }
}
