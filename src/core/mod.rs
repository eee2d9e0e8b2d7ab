pub mod scoring;
pub mod service;

pub use crate::domain::model::{
    Item, PointsBreakdown, PointsResponse, ProcessResponse, Receipt, ReceiptId, ScoredReceipt,
};
pub use crate::domain::ports::{ConfigProvider, ReceiptStore};
pub use crate::utils::error::Result;
