//! Gateway factory.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::DomainGateway;
use crate::types::ProviderCredentials;

#[cfg(feature = "cloudflare")]
use crate::providers::CloudflareGateway;
#[cfg(feature = "dondominio")]
use crate::providers::DondominioGateway;
#[cfg(feature = "godaddy")]
use crate::providers::GodaddyGateway;
#[cfg(feature = "ovh")]
use crate::providers::OvhGateway;

/// Transport options shared by every gateway built in one refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayOptions {
    /// SOCKS5 proxy (`host:port`) for providers that restrict API access by
    /// source address. Only the DonDominio gateway honours it.
    pub proxy_address: Option<String>,
}

/// Creates a [`DomainGateway`] instance from the given credentials.
///
/// The concrete gateway type is determined by the [`ProviderCredentials`] variant.
/// The returned gateway is wrapped in `Arc<dyn DomainGateway>` for easy sharing
/// across async tasks.
///
/// # Errors
///
/// [`ProviderError::InvalidConfiguration`](crate::ProviderError::InvalidConfiguration)
/// when the provider's feature is disabled or its HTTP client cannot be built.
///
/// # Examples
///
/// ```rust,no_run
/// use domain_inventory_provider::{create_gateway, GatewayOptions, ProviderCredentials};
///
/// let gateway = create_gateway(
///     ProviderCredentials::Cloudflare {
///         email: "ops@example.com".to_string(),
///         api_key: "your-key".to_string(),
///     },
///     &GatewayOptions::default(),
/// )
/// .unwrap();
/// ```
pub fn create_gateway(
    credentials: ProviderCredentials,
    options: &GatewayOptions,
) -> Result<Arc<dyn DomainGateway>> {
    #[allow(unused_variables)]
    let proxy = options.proxy_address.as_deref();

    match credentials {
        #[cfg(feature = "ovh")]
        ProviderCredentials::Ovh {
            app_key,
            app_secret,
            consumer_key,
        } => Ok(Arc::new(OvhGateway::new(app_key, app_secret, consumer_key)?)),
        #[cfg(feature = "cloudflare")]
        ProviderCredentials::Cloudflare { email, api_key } => {
            Ok(Arc::new(CloudflareGateway::new(email, api_key)?))
        }
        #[cfg(feature = "godaddy")]
        ProviderCredentials::Godaddy {
            api_key,
            api_secret,
        } => Ok(Arc::new(GodaddyGateway::new(api_key, api_secret)?)),
        #[cfg(feature = "dondominio")]
        ProviderCredentials::Dondominio { username, password } => {
            Ok(Arc::new(DondominioGateway::new(username, password, proxy)?))
        }
        #[allow(unreachable_patterns)]
        other => Err(crate::error::ProviderError::InvalidConfiguration {
            provider: other.provider_type().to_string(),
            detail: "provider support is not compiled in".to_string(),
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::ProviderType;

    #[cfg(feature = "all-providers")]
    #[test]
    fn creates_gateway_for_every_provider() {
        let all = [
            ProviderCredentials::Ovh {
                app_key: "ak".into(),
                app_secret: "as".into(),
                consumer_key: "ck".into(),
            },
            ProviderCredentials::Cloudflare {
                email: "ops@example.com".into(),
                api_key: "key".into(),
            },
            ProviderCredentials::Godaddy {
                api_key: "key".into(),
                api_secret: "secret".into(),
            },
            ProviderCredentials::Dondominio {
                username: "user".into(),
                password: "pass".into(),
            },
        ];

        for credentials in all {
            let expected = credentials.provider_type();
            let gateway = create_gateway(credentials, &GatewayOptions::default()).unwrap();
            assert_eq!(gateway.provider(), expected);
        }
    }

    #[cfg(feature = "dondominio")]
    #[test]
    fn dondominio_accepts_proxy_option() {
        let options = GatewayOptions {
            proxy_address: Some("127.0.0.1:1080".into()),
        };
        let gateway = create_gateway(
            ProviderCredentials::Dondominio {
                username: "user".into(),
                password: "pass".into(),
            },
            &options,
        )
        .unwrap();
        assert_eq!(gateway.provider(), ProviderType::Dondominio);
    }
}
