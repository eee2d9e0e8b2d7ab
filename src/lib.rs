pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::memory_store::InMemoryReceiptStore;
pub use crate::core::scoring::{breakdown, score};
pub use crate::core::service::ReceiptService;
pub use domain::model::{Item, PointsBreakdown, Receipt, ReceiptId, ScoredReceipt};
pub use utils::error::{ReceiptError, Result};
