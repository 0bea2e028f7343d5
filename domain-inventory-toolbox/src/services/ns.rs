//! NS 查询模块

use crate::error::{ToolboxError, ToolboxResult};
use crate::types::NsLookupResult;

use super::resolver::{DEFAULT_RESOLVER, SYSTEM_DNS_LABEL};

/// NS 查询（系统解析器）
pub async fn ns_lookup(domain: &str) -> ToolboxResult<NsLookupResult> {
    log::debug!("NS lookup {domain} via {}", *SYSTEM_DNS_LABEL);

    let response = DEFAULT_RESOLVER.ns_lookup(domain).await.map_err(|e| {
        if e.is_nx_domain() || e.is_no_records_found() {
            ToolboxError::NotFound(format!("no NS records for {domain}"))
        } else {
            ToolboxError::NetworkError(format!("NS query failed: {e}"))
        }
    })?;

    let records = normalize_hosts(response.iter().map(ToString::to_string));
    if records.is_empty() {
        return Err(ToolboxError::NotFound(format!("no NS records for {domain}")));
    }

    Ok(NsLookupResult {
        domain: domain.to_string(),
        records,
    })
}

/// 去掉末尾的根点、转小写、去重，保持应答顺序
fn normalize_hosts(hosts: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for host in hosts {
        let host = host.trim_end_matches('.').to_lowercase();
        if !host.is_empty() && !out.contains(&host) {
            out.push(host);
        }
    }
    out
}
