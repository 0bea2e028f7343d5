//! 凭证文件账号来源
//!
//! 每个 Provider 一个 `.list` 文件，一行一个账号，字段以 `:` 分隔，
//! `#` 开头的行和空行忽略。

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use domain_inventory_core::error::{CoreError, CoreResult};
use domain_inventory_core::traits::AccountSource;
use domain_inventory_core::types::InventoryAccount;
use domain_inventory_provider::{GatewayOptions, ProviderCredentials, ProviderType, create_gateway};

/// File name of a provider's credentials list inside the config directory.
#[must_use]
pub const fn credentials_file_name(provider: ProviderType) -> &'static str {
    match provider {
        ProviderType::Ovh => "ovh.list",
        ProviderType::Cloudflare => "cloudflare.list",
        ProviderType::Godaddy => "godaddy.list",
        ProviderType::Dondominio => "donDominio.list",
    }
}

/// Line syntax shown in error messages.
const fn expected_syntax(provider: ProviderType) -> &'static str {
    match provider {
        ProviderType::Ovh => "accountId:appKey:appSecret:consumerKey:realId",
        ProviderType::Cloudflare => "email:apiKey",
        ProviderType::Godaddy => "accountId:apiKey:apiSecret:realId",
        ProviderType::Dondominio => "accountId:username:password",
    }
}

/// 解析后的一行账号
#[derive(Debug, Clone, PartialEq, Eq)]
struct AccountEntry {
    account_id: String,
    real_id: String,
    credentials: ProviderCredentials,
}

/// [`AccountSource`] reading `<config_dir>/<provider>.list` files.
///
/// The SOCKS5 proxy, when set, is only applied to DonDominio gateways.
pub struct CredentialFileSource {
    config_dir: PathBuf,
    proxy_address: Option<String>,
}

impl CredentialFileSource {
    #[must_use]
    pub fn new(config_dir: impl Into<PathBuf>, proxy_address: Option<String>) -> Self {
        Self {
            config_dir: config_dir.into(),
            proxy_address,
        }
    }

    /// Full path of a provider's credentials file.
    #[must_use]
    pub fn path_for(&self, provider: ProviderType) -> PathBuf {
        self.config_dir.join(credentials_file_name(provider))
    }

    fn gateway_options(&self, provider: ProviderType) -> GatewayOptions {
        match provider {
            ProviderType::Dondominio => GatewayOptions {
                proxy_address: self.proxy_address.clone(),
            },
            _ => GatewayOptions::default(),
        }
    }
}

#[async_trait]
impl AccountSource for CredentialFileSource {
    async fn load_accounts(&self, provider: ProviderType) -> CoreResult<Vec<InventoryAccount>> {
        let path = self.path_for(provider);
        let content = read_credentials_file(&path).await?;
        let entries = parse_accounts(provider, &content, &path)?;
        log::debug!(
            "[{provider}] Loaded {} account(s) from {}",
            entries.len(),
            path.display()
        );

        let options = self.gateway_options(provider);
        entries
            .into_iter()
            .map(|entry| {
                let gateway = create_gateway(entry.credentials, &options)?;
                Ok(InventoryAccount {
                    account_id: entry.account_id,
                    real_id: entry.real_id,
                    gateway,
                })
            })
            .collect()
    }
}

async fn read_credentials_file(path: &Path) -> CoreResult<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            CoreError::ConfigError(format!("Credentials file {} not found", path.display()))
        } else {
            CoreError::ConfigError(format!(
                "Failed to read credentials file {}: {e}",
                path.display()
            ))
        }
    })
}

/// 解析整个文件；任何一行格式错误都使该 Provider 失败
fn parse_accounts(provider: ProviderType, content: &str, path: &Path) -> CoreResult<Vec<AccountEntry>> {
    content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| {
            parse_line(provider, line).ok_or_else(|| {
                CoreError::ConfigError(format!(
                    "{}:{line_no}: malformed line, expected {}",
                    path.display(),
                    expected_syntax(provider)
                ))
            })
        })
        .collect()
}

/// 字段数必须完全匹配且均非空
fn parse_line(provider: ProviderType, line: &str) -> Option<AccountEntry> {
    let fields: Vec<&str> = line.split(':').map(str::trim).collect();
    if fields.iter().any(|f| f.is_empty()) {
        return None;
    }

    let owned = |i: usize| fields[i].to_string();
    let entry = match (provider, fields.len()) {
        (ProviderType::Ovh, 5) => AccountEntry {
            account_id: owned(0),
            real_id: owned(4),
            credentials: ProviderCredentials::Ovh {
                app_key: owned(1),
                app_secret: owned(2),
                consumer_key: owned(3),
            },
        },
        (ProviderType::Cloudflare, 2) => AccountEntry {
            account_id: owned(0),
            real_id: owned(0),
            credentials: ProviderCredentials::Cloudflare {
                email: owned(0),
                api_key: owned(1),
            },
        },
        (ProviderType::Godaddy, 4) => AccountEntry {
            account_id: owned(0),
            real_id: owned(3),
            credentials: ProviderCredentials::Godaddy {
                api_key: owned(1),
                api_secret: owned(2),
            },
        },
        (ProviderType::Dondominio, 3) => AccountEntry {
            account_id: owned(0),
            real_id: owned(1),
            credentials: ProviderCredentials::Dondominio {
                username: owned(1),
                password: owned(2),
            },
        },
        _ => return None,
    };
    Some(entry)
}
