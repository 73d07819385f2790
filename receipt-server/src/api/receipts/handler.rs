//! Receipt API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::Serialize;
use uuid::Uuid;

use crate::core::ServerState;
use crate::db::models::ReceiptCreate;
use crate::scoring::compute_points;
use crate::utils::{AppError, AppResult};

/// 提交收据的响应
#[derive(Debug, Serialize)]
pub struct ReceiptIdResponse {
    pub id: String,
}

/// 积分查询的响应
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u32,
}

/// POST /api/receipts - 提交收据
///
/// 任何解码失败 (JSON 语法、字段缺失、content-type) 都是 400。
/// 成功时生成随机 128 位标识符，存储收据并返回该标识符。
pub async fn process(
    State(state): State<ServerState>,
    payload: Result<Json<ReceiptCreate>, JsonRejection>,
) -> AppResult<Json<ReceiptIdResponse>> {
    let Json(payload) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let id = Uuid::new_v4().to_string();
    let receipt = payload.into_receipt(id.clone());

    state.store().insert(receipt).await?;

    tracing::info!(receipt_id = %id, "Receipt stored");

    Ok(Json(ReceiptIdResponse { id }))
}

/// GET /api/receipts/:id - 查询收据积分
///
/// 积分按需计算，不落库；同一收据每次查询结果一致。
pub async fn points(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<PointsResponse>> {
    let receipt = state
        .store()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Receipt {} not found", id)))?;

    let points = compute_points(&receipt);

    Ok(Json(PointsResponse { points }))
}
