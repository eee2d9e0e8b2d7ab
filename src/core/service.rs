use crate::core::scoring;
use crate::core::{Item, Receipt, ReceiptId, ReceiptStore, ScoredReceipt};
use crate::utils::error::{ReceiptError, Result};
use std::collections::BTreeMap;

pub const EXAMPLE_RECEIPT_ID: &str = "example";

pub struct ReceiptService<S: ReceiptStore> {
    store: S,
}

impl<S: ReceiptStore> ReceiptService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn process(&self, receipt: Receipt) -> ReceiptId {
        let item_count = receipt.items.len();
        let id = self.store.put(receipt).await;
        tracing::info!(id = %id, items = item_count, "📥 Stored receipt");
        id
    }

    pub async fn points(&self, id: &ReceiptId) -> Result<i64> {
        let receipt = self.find(id).await?;
        Ok(scoring::score(&receipt))
    }

    pub async fn scored(&self, id: &ReceiptId) -> Result<ScoredReceipt> {
        let receipt = self.find(id).await?;
        let points = scoring::score(&receipt);
        Ok(ScoredReceipt { receipt, points })
    }

    pub async fn list(&self) -> BTreeMap<ReceiptId, Receipt> {
        self.store.list().await
    }

    pub async fn count(&self) -> usize {
        self.store.len().await
    }

    /// 預先載入示範收據，方便直接查詢 `/receipts/example/points`
    pub async fn seed_example(&self) {
        self.store
            .insert_with_id(ReceiptId::new(EXAMPLE_RECEIPT_ID), example_receipt())
            .await;
        tracing::info!(id = EXAMPLE_RECEIPT_ID, "Seeded example receipt");
    }

    async fn find(&self, id: &ReceiptId) -> Result<Receipt> {
        self.store.get(id).await.ok_or_else(|| ReceiptError::NotFound {
            id: id.to_string(),
        })
    }
}

pub fn example_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: (0..4).map(|_| Item::new("Gatorade", "2.25")).collect(),
        total: "9.00".to_string(),
    }
}
