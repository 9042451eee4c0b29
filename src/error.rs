use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// API 调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 数据集存储错误
    #[error("数据集错误: {0}")]
    Store(#[from] StoreError),
    /// 其他错误（用于包装第三方库错误）
    #[error("错误: {0}")]
    Other(String),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 必需的环境变量不存在
    #[error("环境变量 {var_name} 不存在")]
    EnvVarNotFound { var_name: String },
}

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 客户端构建失败
    #[error("HTTP客户端构建失败: {source}")]
    ClientBuildFailed {
        #[source]
        source: reqwest::Error,
    },
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// API 返回非成功状态码
    #[error("API返回错误响应 ({endpoint}): 状态码 {status}, 内容: {body}")]
    BadStatus {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// 响应体解析失败
    #[error("响应解析失败 ({endpoint}): {source}")]
    DecodeFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

/// 数据集存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    /// 读取数据集文件失败
    #[error("读取数据集失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 数据集文件存在但无法解析（不允许用空数据覆盖历史）
    #[error("数据集已损坏，无法解析 ({path}): {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// 序列化数据集失败
    #[error("序列化数据集失败: {source}")]
    SerializeFailed {
        #[source]
        source: serde_json::Error,
    },
    /// 写入数据集文件失败
    #[error("写入数据集失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建环境变量缺失错误
    pub fn env_var_not_found(var_name: impl Into<String>) -> Self {
        AppError::Config(ConfigError::EnvVarNotFound {
            var_name: var_name.into(),
        })
    }

    /// 创建HTTP客户端构建错误
    pub fn client_build_failed(source: reqwest::Error) -> Self {
        AppError::Api(ApiError::ClientBuildFailed { source })
    }

    /// 创建API请求失败错误
    pub fn api_request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 创建API错误响应错误
    pub fn api_bad_status(endpoint: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        AppError::Api(ApiError::BadStatus {
            endpoint: endpoint.into(),
            status,
            body: body.into(),
        })
    }

    /// 创建响应解析失败错误
    pub fn api_decode_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Api(ApiError::DecodeFailed {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 创建数据集读取错误
    pub fn store_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Store(StoreError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建数据集损坏错误
    pub fn store_corrupt(path: impl Into<String>, source: serde_json::Error) -> Self {
        AppError::Store(StoreError::Corrupt {
            path: path.into(),
            source,
        })
    }

    /// 创建数据集写入错误
    pub fn store_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Store(StoreError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
