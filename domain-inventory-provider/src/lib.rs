//! # domain-inventory-provider
//!
//! Domain-list gateways for the registrar and DNS-host APIs whose inventories
//! are aggregated into the local domain cache.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [OVH](https://www.ovh.com/) | `ovh` | Application key + consumer key, SHA1 signature |
//! | [Cloudflare](https://www.cloudflare.com/) | `cloudflare` | Global API key (`X-Auth-Email` / `X-Auth-Key`) |
//! | [GoDaddy](https://www.godaddy.com/) | `godaddy` | `sso-key` header |
//! | [DonDominio](https://www.dondominio.com/) | `dondominio` | Form credentials, optional SOCKS5 proxy |
//!
//! ## Feature Flags
//!
//! - **`all-providers`** *(default)*: enable all providers listed above.
//! - **`ovh`**, **`cloudflare`**, **`godaddy`**, **`dondominio`**: enable a single provider.
//! - **`native-tls`** *(default)* / **`rustls`**: TLS backend for `reqwest`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use domain_inventory_provider::{create_gateway, GatewayOptions, ProviderCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = create_gateway(
//!         ProviderCredentials::Godaddy {
//!             api_key: "key".to_string(),
//!             api_secret: "secret".to_string(),
//!         },
//!         &GatewayOptions::default(),
//!     )?;
//!
//!     for domain in gateway.list_domains().await? {
//!         println!("{domain}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every gateway returns [`Result<T, ProviderError>`](ProviderError). Variants carry the
//! provider name, and [`ProviderError::is_expected`] tells callers whether a failure
//! is an operator problem (bad credentials, missing permission) or a fault.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::{GatewayOptions, create_gateway};

// Re-export core trait
pub use traits::DomainGateway;

// Re-export types
pub use types::{ProviderCredentials, ProviderType};

// Re-export utils module
pub use utils::log_sanitizer;

// Re-export concrete gateways (behind feature flags)
#[cfg(feature = "ovh")]
pub use providers::OvhGateway;

#[cfg(feature = "cloudflare")]
pub use providers::CloudflareGateway;

#[cfg(feature = "godaddy")]
pub use providers::GodaddyGateway;

#[cfg(feature = "dondominio")]
pub use providers::DondominioGateway;
