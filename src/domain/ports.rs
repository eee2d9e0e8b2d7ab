use crate::domain::model::{Receipt, ReceiptId};
use async_trait::async_trait;
use std::collections::BTreeMap;

#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Stores the receipt under a freshly generated id and returns that id.
    async fn put(&self, receipt: Receipt) -> ReceiptId;
    async fn insert_with_id(&self, id: ReceiptId, receipt: Receipt);
    async fn get(&self, id: &ReceiptId) -> Option<Receipt>;
    async fn list(&self) -> BTreeMap<ReceiptId, Receipt>;
    async fn len(&self) -> usize;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn seed_example(&self) -> bool;
    fn json_logs(&self) -> bool;
    fn verbose(&self) -> bool;
}
