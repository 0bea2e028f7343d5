//! Live network lookups for domain-inventory
//!
//! 提供缓存未命中时的实时查询：NS 记录查询与 WHOIS 查询。
//! 所有功能无状态，独立于缓存与 Provider 逻辑。

mod error;
mod services;
mod types;

pub use error::{ToolboxError, ToolboxResult};
pub use services::{DEFAULT_LOOKUP_TIMEOUT, ToolboxService};
pub use types::{NsLookupResult, WhoisResult};
