//! Financial tip generation from a transaction list

use std::sync::Arc;

use tracing::{debug, error};

use crate::config::ClientConfig;
use crate::error::InsightError;
use crate::llm::{self, TextGenerator};
use crate::model::{Category, Transaction};
use crate::prompt::build_prompt;
use crate::summary::{self, SpendingSummary, MIN_EXPENSE_COUNT};

/// Turns a ledger into money-saving tips via a text generation provider.
///
/// Holds no per-call state, so one generator can serve any number of
/// concurrent requests.
#[derive(Clone, Default)]
pub struct InsightGenerator {
    client: Option<Arc<dyn TextGenerator>>,
}

impl std::fmt::Debug for InsightGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightGenerator")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

impl InsightGenerator {
    pub fn new(client: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { client }
    }

    /// Build the provider client from configuration; AI stays disabled when
    /// no key is configured or the client cannot be built
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(llm::initialize(config))
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Produce tips for the user. Never fails: every error becomes a
    /// localized message.
    pub async fn generate_insights(
        &self,
        transactions: &[Transaction],
        categories: &[Category],
    ) -> String {
        match self.try_generate_insights(transactions, categories).await {
            Ok(text) => text,
            Err(e) => {
                match &e {
                    InsightError::Upstream(cause) => {
                        error!("Error calling text generation API: {}", cause)
                    }
                    InsightError::AmountOverflow => error!("Failed to summarize expenses: {}", e),
                    InsightError::Disabled | InsightError::InsufficientData { .. } => {}
                }
                e.fallback_message().to_string()
            }
        }
    }

    /// Same pipeline as [`generate_insights`](Self::generate_insights) but
    /// with the failure reason kept
    pub async fn try_generate_insights(
        &self,
        transactions: &[Transaction],
        categories: &[Category],
    ) -> Result<String, InsightError> {
        let client = self.client.as_ref().ok_or(InsightError::Disabled)?;

        let expenses = summary::expenses(transactions);
        if expenses.len() < MIN_EXPENSE_COUNT {
            debug!(
                "Only {} expense transactions, need {}",
                expenses.len(),
                MIN_EXPENSE_COUNT
            );
            return Err(InsightError::InsufficientData {
                expenses: expenses.len(),
            });
        }

        let summary = SpendingSummary::from_expenses(&expenses, categories)?;
        if summary.uncategorized_count > 0 {
            debug!(
                "{} expenses reference unknown categories",
                summary.uncategorized_count
            );
        }

        let prompt = build_prompt(&summary);
        debug!("Requesting insights for {} expenses", summary.expense_count);

        Ok(client.generate(&prompt).await?)
    }
}
