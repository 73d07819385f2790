//! Receipt Server - 收据积分服务
//!
//! # 架构概述
//!
//! 接收提交的购物收据，持久化后按固定业务规则计算忠诚度积分，
//! 并支持按标识符查询积分：
//!
//! - **积分引擎** (`scoring`): 纯函数规则引擎，收据 → 积分
//! - **数据库** (`db`): SurrealDB 收据存储 (可注入内存实现)
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! receipt-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── scoring/       # 积分规则引擎
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层
//! └── utils/         # 错误、日志等工具
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod scoring;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState, StoreBackend};
pub use crate::db::repository::{MemoryReceiptStore, ReceiptStore};
pub use crate::scoring::compute_points;
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// 设置环境 (dotenv + 日志)
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    init_logger_with_file(Some(&level), None);
}

pub fn print_banner() {
    println!(
        r#"
    ____                _       __
   / __ \___  ________ (_)___  / /_
  / /_/ / _ \/ ___/ _ \/ / __ \/ __/
 / _, _/  __/ /__/  __/ / /_/ / /_
/_/ |_|\___/\___/\___/_/ .___/\__/
                      /_/
    "#
    );
}
