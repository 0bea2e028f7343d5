//! 统一错误类型定义

use serde::Serialize;
use thiserror::Error;

/// 工具箱错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ToolboxError {
    /// 输入校验失败
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 网络错误（解析器、WHOIS 服务器连接失败等）
    #[error("Network error: {0}")]
    NetworkError(String),

    /// 查询超时
    #[error("Lookup timed out after {0}s")]
    Timeout(u64),

    /// 查询成功但没有结果（NXDOMAIN、无 NS 记录、WHOIS 无匹配）
    #[error("Not found: {0}")]
    NotFound(String),
}

/// 工具箱 Result 类型别名
pub type ToolboxResult<T> = std::result::Result<T, ToolboxError>;
