//! OVH 请求签名
//!
//! `"$1$" + hex(sha1(secret+consumer+method+url+body+timestamp))`，各字段以 `+` 连接。

use sha1::{Digest, Sha1};

pub(crate) fn sign_request(
    app_secret: &str,
    consumer_key: &str,
    method: &str,
    url: &str,
    body: &str,
    timestamp: i64,
) -> String {
    let payload = format!("{app_secret}+{consumer_key}+{method}+{url}+{body}+{timestamp}");
    let mut hasher = Sha1::new();
    hasher.update(payload.as_bytes());
    format!("$1${}", hex::encode(hasher.finalize()))
}
