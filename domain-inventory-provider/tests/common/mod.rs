//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use domain_inventory_provider::{
    DomainGateway, GatewayOptions, ProviderCredentials, create_gateway,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试上下文 - 封装 Gateway 和账号下应存在的域名
pub struct TestContext {
    pub gateway: Arc<dyn DomainGateway>,
    /// `TEST_DOMAIN`，可选；设置后断言其出现在列表中
    pub expected_domain: Option<String>,
}

impl TestContext {
    fn build(credentials: ProviderCredentials, options: &GatewayOptions) -> Option<Self> {
        let gateway = create_gateway(credentials, options).ok()?;
        Some(Self {
            gateway,
            expected_domain: env::var("TEST_DOMAIN").ok(),
        })
    }

    /// 创建 OVH 测试上下文
    pub fn ovh() -> Option<Self> {
        let credentials = ProviderCredentials::Ovh {
            app_key: env::var("OVH_APP_KEY").ok()?,
            app_secret: env::var("OVH_APP_SECRET").ok()?,
            consumer_key: env::var("OVH_CONSUMER_KEY").ok()?,
        };
        Self::build(credentials, &GatewayOptions::default())
    }

    /// 创建 Cloudflare 测试上下文
    pub fn cloudflare() -> Option<Self> {
        let credentials = ProviderCredentials::Cloudflare {
            email: env::var("CLOUDFLARE_EMAIL").ok()?,
            api_key: env::var("CLOUDFLARE_API_KEY").ok()?,
        };
        Self::build(credentials, &GatewayOptions::default())
    }

    /// 创建 GoDaddy 测试上下文
    pub fn godaddy() -> Option<Self> {
        let credentials = ProviderCredentials::Godaddy {
            api_key: env::var("GODADDY_API_KEY").ok()?,
            api_secret: env::var("GODADDY_API_SECRET").ok()?,
        };
        Self::build(credentials, &GatewayOptions::default())
    }

    /// 创建 DonDominio 测试上下文（`DONDOMINIO_PROXY` 可选）
    pub fn dondominio() -> Option<Self> {
        let credentials = ProviderCredentials::Dondominio {
            username: env::var("DONDOMINIO_USERNAME").ok()?,
            password: env::var("DONDOMINIO_PASSWORD").ok()?,
        };
        let options = GatewayOptions {
            proxy_address: env::var("DONDOMINIO_PROXY").ok(),
        };
        Self::build(credentials, &options)
    }

    /// 列出域名，并在设置了 `TEST_DOMAIN` 时检查其存在
    pub async fn assert_lists_domains(&self) {
        let names = require_ok!(self.gateway.list_domains().await, "list_domains 失败");
        eprintln!(
            "[{}] {} domains listed",
            self.gateway.provider(),
            names.len()
        );

        assert!(names.iter().all(|n| !n.trim().is_empty()));
        if let Some(expected) = &self.expected_domain {
            assert!(
                names.iter().any(|n| n.eq_ignore_ascii_case(expected)),
                "{expected} not found in listing"
            );
        }
    }
}
