//! token签发
//!
//! 认证三元组 = (digest, uuid, 毫秒时间戳)。签名串固定为
//! `uuid\n<接口url>\n<时间戳>`，用抓取到的版本号作为HMAC-MD5的key，
//! digest用标准Base64编码放进`Authorization`头。时间戳和uuid都参与了
//! 签名，所以三元组不能跨请求复用。

use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose};
use papago_sdk_common::helper::{sign_hmac_md5, timestamp_millis};
use uuid::Uuid;

use super::error::ScrapeError;
use super::version::VersionResolver;

pub struct AuthTriple {
    /// 标准Base64编码的HMAC-MD5摘要
    pub digest: String,
    /// UUIDv4，同时作为请求体里的deviceId
    pub request_id: String,
    /// 毫秒时间戳，必须和`Timestamp`请求头一致
    pub timestamp: i64,
}

impl AuthTriple {
    /// URL安全、去掉padding的digest，用于拼在url里的场景
    pub fn url_safe_digest(&self) -> String {
        self.digest
            .replace('+', "-")
            .replace('/', "_")
            .trim_end_matches('=')
            .to_owned()
    }
}

/// 确定性的签名核心，方便做回归测试
pub fn sign_token(version: &str, request_id: &str, endpoint_url: &str, timestamp: i64) -> String {
    let str_to_sign = format!("{request_id}\n{endpoint_url}\n{timestamp}");
    general_purpose::STANDARD.encode(sign_hmac_md5(version, &str_to_sign))
}

pub struct TokenMinter {
    resolver: Arc<dyn VersionResolver>,
}

impl TokenMinter {
    pub fn new(resolver: Arc<dyn VersionResolver>) -> Self {
        Self { resolver }
    }

    pub async fn mint(&self, endpoint_url: &str) -> Result<AuthTriple, ScrapeError> {
        let request_id = Uuid::new_v4().to_string();
        let timestamp = timestamp_millis();
        let version = self.resolver.resolve().await?;
        let digest = sign_token(&version, &request_id, endpoint_url, timestamp);
        Ok(AuthTriple {
            digest,
            request_id,
            timestamp,
        })
    }
}
