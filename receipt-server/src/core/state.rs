use std::sync::Arc;
use std::time::Duration;

use crate::core::{Config, Result, StoreBackend};
use crate::db::DbService;
use crate::db::repository::{MemoryReceiptStore, ReceiptRepository, ReceiptStore};

/// 服务器状态 - 持有配置和注入的存储句柄
///
/// ServerState 是所有 HTTP handler 共享的状态。存储通过
/// [`ReceiptStore`] trait 注入，测试时可以替换为内存实现。
/// 使用 Arc 实现浅拷贝，克隆成本极低。
///
/// # 组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | Arc<dyn ReceiptStore> | 收据存储 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 收据存储 (并发安全，handler 间共享)
    store: Arc<dyn ReceiptStore>,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("store", &"<dyn ReceiptStore>")
            .finish()
    }
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 测试时直接注入 [`MemoryReceiptStore`]；
    /// 生产路径使用 [`initialize()`](Self::initialize)
    pub fn new(config: Config, store: Arc<dyn ReceiptStore>) -> Self {
        Self { config, store }
    }

    /// 初始化服务器状态
    ///
    /// 按配置选择存储后端：
    /// - `surreal`: 连接外部 SurrealDB (连接失败直接返回错误)
    /// - `memory`: 进程内存储，仅用于开发
    pub async fn initialize(config: &Config) -> Result<Self> {
        let store: Arc<dyn ReceiptStore> = match config.store_backend {
            StoreBackend::Surreal => {
                let db_service = DbService::connect(config).await?;
                Arc::new(ReceiptRepository::new(
                    db_service.db,
                    Duration::from_millis(config.store_timeout_ms),
                ))
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory receipt store, data will not survive restarts");
                Arc::new(MemoryReceiptStore::new())
            }
        };

        Ok(Self::new(config.clone(), store))
    }

    /// 获取存储句柄
    pub fn store(&self) -> &Arc<dyn ReceiptStore> {
        &self.store
    }
}
