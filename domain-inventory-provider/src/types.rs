use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::log_sanitizer::mask_secret;

// ============ Provider Types ============

/// Identifies which registrar / DNS host a domain record came from.
///
/// The variant is always available, independent of which gateway features are
/// compiled in, so cached records from any provider can be read back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// OVH (`ovh-eu` endpoint).
    Ovh,
    /// Cloudflare.
    Cloudflare,
    /// GoDaddy.
    Godaddy,
    /// DonDominio.
    Dondominio,
}

impl ProviderType {
    /// Every provider, in refresh order.
    pub const ALL: [Self; 4] = [Self::Ovh, Self::Cloudflare, Self::Godaddy, Self::Dondominio];

    /// Lowercase identifier used in logs and in the cache's `provider` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ovh => "ovh",
            Self::Cloudflare => "cloudflare",
            Self::Godaddy => "godaddy",
            Self::Dondominio => "dondominio",
        }
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ovh" => Ok(Self::Ovh),
            "cloudflare" => Ok(Self::Cloudflare),
            "godaddy" => Ok(Self::Godaddy),
            "dondominio" => Ok(Self::Dondominio),
            _ => Err(format!("Unsupported provider: {s}")),
        }
    }
}

// ============ Credentials ============

/// Provider-specific authentication credentials.
///
/// Each variant holds exactly what its gateway needs to authenticate a
/// single account. Account labels (the cached `account_id` / `real_id`) are
/// not part of the credentials.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "provider", content = "credentials", rename_all = "lowercase")]
pub enum ProviderCredentials {
    /// OVH application credentials.
    Ovh {
        /// Application key.
        app_key: String,
        /// Application secret.
        app_secret: String,
        /// Consumer key granted to the application.
        consumer_key: String,
    },

    /// Cloudflare global API key credentials.
    Cloudflare {
        /// Account e-mail (`X-Auth-Email`).
        email: String,
        /// Global API key (`X-Auth-Key`).
        api_key: String,
    },

    /// GoDaddy production API credentials.
    Godaddy {
        /// API key.
        api_key: String,
        /// API secret.
        api_secret: String,
    },

    /// DonDominio simple-API credentials.
    Dondominio {
        /// API user.
        username: String,
        /// API password.
        password: String,
    },
}

impl ProviderCredentials {
    /// Provider these credentials belong to.
    #[must_use]
    pub const fn provider_type(&self) -> ProviderType {
        match self {
            Self::Ovh { .. } => ProviderType::Ovh,
            Self::Cloudflare { .. } => ProviderType::Cloudflare,
            Self::Godaddy { .. } => ProviderType::Godaddy,
            Self::Dondominio { .. } => ProviderType::Dondominio,
        }
    }
}

// Secrets never reach logs through `{:?}`.
impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ovh { app_key, .. } => f
                .debug_struct("Ovh")
                .field("app_key", &mask_secret(app_key))
                .finish_non_exhaustive(),
            Self::Cloudflare { email, .. } => f
                .debug_struct("Cloudflare")
                .field("email", email)
                .finish_non_exhaustive(),
            Self::Godaddy { api_key, .. } => f
                .debug_struct("Godaddy")
                .field("api_key", &mask_secret(api_key))
                .finish_non_exhaustive(),
            Self::Dondominio { username, .. } => f
                .debug_struct("Dondominio")
                .field("username", username)
                .finish_non_exhaustive(),
        }
    }
}
