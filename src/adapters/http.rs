use crate::core::service::ReceiptService;
use crate::core::{PointsResponse, ProcessResponse, Receipt, ReceiptId, ReceiptStore, ScoredReceipt};
use crate::utils::error::{ReceiptError, Result};
use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

pub fn router<S: ReceiptStore + 'static>(service: Arc<ReceiptService<S>>) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt::<S>))
        .route("/receipts/{id}/points", get(receipt_points::<S>))
        .route("/receipts/{id}", get(scored_receipt::<S>))
        .route("/receipts", get(list_receipts::<S>))
        .route("/health", get(health::<S>))
        .with_state(service)
}

async fn process_receipt<S: ReceiptStore>(
    State(service): State<Arc<ReceiptService<S>>>,
    body: Bytes,
) -> Result<Json<ProcessResponse>> {
    // Content-Type 不檢查；只有無法解析的內容才拒絕，且不寫入儲存
    let receipt: Receipt =
        serde_json::from_slice(&body).map_err(|e| ReceiptError::InvalidReceipt {
            message: e.to_string(),
        })?;

    let id = service.process(receipt).await;
    Ok(Json(ProcessResponse { id }))
}

async fn receipt_points<S: ReceiptStore>(
    State(service): State<Arc<ReceiptService<S>>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>> {
    let points = service.points(&ReceiptId::new(id)).await?;
    Ok(Json(PointsResponse { points }))
}

async fn scored_receipt<S: ReceiptStore>(
    State(service): State<Arc<ReceiptService<S>>>,
    Path(id): Path<String>,
) -> Result<Json<ScoredReceipt>> {
    let scored = service.scored(&ReceiptId::new(id)).await?;
    Ok(Json(scored))
}

async fn list_receipts<S: ReceiptStore>(
    State(service): State<Arc<ReceiptService<S>>>,
) -> Json<BTreeMap<ReceiptId, Receipt>> {
    Json(service.list().await)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    receipts: usize,
}

async fn health<S: ReceiptStore>(
    State(service): State<Arc<ReceiptService<S>>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        receipts: service.count().await,
    })
}
