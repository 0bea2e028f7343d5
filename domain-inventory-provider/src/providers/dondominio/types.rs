//! DonDominio API 类型定义

use serde::{Deserialize, Deserializer};

/// 通用响应信封
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DondominioResponse {
    pub success: bool,
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub error_code_msg: String,
    /// 失败时 API 返回 `[]` 而非对象
    #[serde(default, deserialize_with = "object_or_empty")]
    pub response_data: Option<DomainListData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainListData {
    pub query_info: Option<QueryInfo>,
    #[serde(default)]
    pub domains: Vec<DondominioDomain>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryInfo {
    #[serde(default)]
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct DondominioDomain {
    pub name: String,
}

fn object_or_empty<'de, D>(deserializer: D) -> Result<Option<DomainListData>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_object() {
        serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom)
    } else {
        Ok(None)
    }
}
