//! godaddy 集成测试（需要真实凭证，默认忽略）
//!
//! 运行: `cargo test -p domain-inventory-provider --test godaddy_test -- --ignored`

mod common;

use common::TestContext;
use domain_inventory_provider::{GatewayOptions, ProviderCredentials, ProviderError, create_gateway};

#[tokio::test]
#[ignore = "需要真实 godaddy 凭证"]
async fn godaddy_list_domains() {
    skip_if_no_credentials!("GODADDY_API_KEY", "GODADDY_API_SECRET");

    let Some(ctx) = TestContext::godaddy() else {
        panic!("无法创建 godaddy 测试上下文");
    };
    ctx.assert_lists_domains().await;
}

#[tokio::test]
#[ignore = "需要访问 godaddy API"]
async fn godaddy_rejects_invalid_credentials() {
    let gateway = match create_gateway(
        ProviderCredentials::Godaddy {
            api_key: "invalid".to_string(),
            api_secret: "invalid".to_string(),
        },
        &GatewayOptions::default(),
    ) {
        Ok(gateway) => gateway,
        Err(e) => panic!("create_gateway 失败: {e}"),
    };

    let result = gateway.list_domains().await;
    assert!(
        matches!(
            result,
            Err(ProviderError::InvalidCredentials { .. } | ProviderError::PermissionDenied { .. })
        ),
        "unexpected result: {result:?}"
    );
}
