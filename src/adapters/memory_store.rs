use crate::core::{Receipt, ReceiptId, ReceiptStore};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

/// Process-local receipt storage. Everything is lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, Receipt>>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn put(&self, receipt: Receipt) -> ReceiptId {
        let mut receipts = self.receipts.write().await;
        // v4 collisions are practically impossible, but ids must stay unique
        let mut id = ReceiptId::generate();
        while receipts.contains_key(&id) {
            id = ReceiptId::generate();
        }
        receipts.insert(id.clone(), receipt);
        id
    }

    async fn insert_with_id(&self, id: ReceiptId, receipt: Receipt) {
        self.receipts.write().await.insert(id, receipt);
    }

    async fn get(&self, id: &ReceiptId) -> Option<Receipt> {
        self.receipts.read().await.get(id).cloned()
    }

    async fn list(&self) -> BTreeMap<ReceiptId, Receipt> {
        self.receipts
            .read()
            .await
            .iter()
            .map(|(id, receipt)| (id.clone(), receipt.clone()))
            .collect()
    }

    async fn len(&self) -> usize {
        self.receipts.read().await.len()
    }
}
