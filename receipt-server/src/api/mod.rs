//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`receipts`] - 收据提交和积分查询
//!
//! 每个资源模块暴露自己的 `router()`，在 [`app`] 中合并。

pub mod health;
pub mod middleware;
pub mod receipts;

use axum::Router;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Build the full application router
pub fn app(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(receipts::router())
        .layer(axum::middleware::from_fn(middleware::request_logging))
        .with_state(state)
}
