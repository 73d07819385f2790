/// 服务器配置 - 积分服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | STORE_BACKEND | surreal | 存储后端 (surreal \| memory) |
/// | SURREALDB_ADDR | surreal:8000 | SurrealDB 地址 (host:port) |
/// | SURREALDB_USER | root | SurrealDB 用户 |
/// | SURREALDB_PASS | root | SurrealDB 密码 |
/// | SURREALDB_NS | loyalty | SurrealDB namespace |
/// | SURREALDB_DB | receipts | SurrealDB database |
/// | STORE_TIMEOUT_MS | 10000 | 存储操作超时(毫秒) |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=9090 STORE_BACKEND=memory cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 存储后端
    pub store_backend: StoreBackend,
    /// SurrealDB 地址 (host:port)
    pub surreal_addr: String,
    /// SurrealDB 用户
    pub surreal_user: String,
    /// SurrealDB 密码
    pub surreal_pass: String,
    /// SurrealDB namespace
    pub surreal_ns: String,
    /// SurrealDB database
    pub surreal_db: String,
    /// 存储操作超时时间 (毫秒)
    pub store_timeout_ms: u64,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
}

/// 存储后端选择
///
/// `Memory` 仅用于本地开发和测试，数据不持久化。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Surreal,
    Memory,
}

impl StoreBackend {
    /// 从字符串解析，未知值回落到 Surreal
    fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "memory" => StoreBackend::Memory,
            _ => StoreBackend::Surreal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Surreal => "surreal",
            StoreBackend::Memory => "memory",
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            store_backend: std::env::var("STORE_BACKEND")
                .map(|v| StoreBackend::parse(&v))
                .unwrap_or(StoreBackend::Surreal),
            surreal_addr: std::env::var("SURREALDB_ADDR")
                .unwrap_or_else(|_| "surreal:8000".into()),
            surreal_user: std::env::var("SURREALDB_USER").unwrap_or_else(|_| "root".into()),
            surreal_pass: std::env::var("SURREALDB_PASS").unwrap_or_else(|_| "root".into()),
            surreal_ns: std::env::var("SURREALDB_NS").unwrap_or_else(|_| "loyalty".into()),
            surreal_db: std::env::var("SURREALDB_DB").unwrap_or_else(|_| "receipts".into()),
            store_timeout_ms: std::env::var("STORE_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10_000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, store_backend: StoreBackend) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.store_backend = store_backend;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
