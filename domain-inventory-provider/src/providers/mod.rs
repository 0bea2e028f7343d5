//! Domain-list gateway implementations

/// Shared utilities used by gateway implementations.
pub mod common;

#[cfg(feature = "cloudflare")]
mod cloudflare;
#[cfg(feature = "dondominio")]
mod dondominio;
#[cfg(feature = "godaddy")]
mod godaddy;
#[cfg(feature = "ovh")]
mod ovh;

#[cfg(feature = "cloudflare")]
pub use cloudflare::CloudflareGateway;
#[cfg(feature = "dondominio")]
pub use dondominio::DondominioGateway;
#[cfg(feature = "godaddy")]
pub use godaddy::GodaddyGateway;
#[cfg(feature = "ovh")]
pub use ovh::OvhGateway;
