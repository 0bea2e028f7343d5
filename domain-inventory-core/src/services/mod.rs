//! 业务逻辑服务层

mod inventory_service;
mod lookup_service;
mod toolbox_resolver;

pub use inventory_service::InventoryService;
pub use lookup_service::LookupService;
pub use toolbox_resolver::ToolboxFallbackResolver;
