//! Common types and utilities for Spend Insights
//!
//! This crate contains:
//! - Ledger types (transactions, categories)
//! - Expense aggregation and vi-VN amount formatting
//! - The insight prompt and localized fallback messages
//! - Text generation clients (Gemini, OpenAI-compatible)
//! - The insight generator tying them together

pub mod config;
pub mod error;
pub mod format;
#[cfg(feature = "llm")]
pub mod gemini;
#[cfg(feature = "llm")]
pub mod insights;
#[cfg(feature = "llm")]
pub mod llm;
pub mod messages;
pub mod model;
pub mod prompt;
pub mod summary;

// Re-export commonly used types
pub use config::{ClientConfig, Provider, ProviderArgs};
pub use error::{InsightError, LlmError};
pub use format::format_vnd_amount;
#[cfg(feature = "llm")]
pub use gemini::GeminiClient;
#[cfg(feature = "llm")]
pub use insights::InsightGenerator;
#[cfg(feature = "llm")]
pub use llm::{initialize, OpenAiClient, TextGenerator};
pub use model::{Category, Ledger, Transaction, TransactionType};
pub use prompt::build_prompt;
pub use summary::{CategorySpend, SpendingSummary, MIN_EXPENSE_COUNT, TOP_CATEGORY_COUNT};
