//! 版本号抓取
//!
//! papago前端会轮换一个版本号作为签名的key，流程：
//! 1. GET 主页，从html里找`/main.<token>`得到脚本路径
//! 2. GET 脚本，从脚本内容里找`v1.<token>`
//!
//! 每次签发token前都重新抓取，不缓存。

use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::error::ScrapeError;
use crate::fetch::{FetchRequest, HttpFetcher};

const MAIN_SCRIPT_PATTERN: &str = r#"/main\.([^"]+)"#;
const VERSION_PATTERN: &str = r#"v1\.([^"]+)"#;

static MAIN_SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MAIN_SCRIPT_PATTERN).unwrap());
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(VERSION_PATTERN).unwrap());

#[async_trait::async_trait]
pub trait VersionResolver: Send + Sync {
    async fn resolve(&self) -> Result<String, ScrapeError>;
}

/// 默认实现：从前端页面抓取
pub struct ScriptVersionResolver {
    base_url: String,
    fetcher: Arc<dyn HttpFetcher>,
}

impl ScriptVersionResolver {
    pub fn new(base_url: String, fetcher: Arc<dyn HttpFetcher>) -> Self {
        Self { base_url, fetcher }
    }

    async fn fetch_text(&self, url: &str) -> Result<String, ScrapeError> {
        let resp = self.fetcher.fetch(url, FetchRequest::get()).await?;
        if !resp.is_success() {
            return Err(ScrapeError::BadStatus {
                url: url.to_owned(),
                status: resp.status,
            });
        }
        Ok(resp.body)
    }
}

#[async_trait::async_trait]
impl VersionResolver for ScriptVersionResolver {
    async fn resolve(&self) -> Result<String, ScrapeError> {
        let html = self.fetch_text(&self.base_url).await?;
        let script_path =
            MAIN_SCRIPT_RE
                .find(&html)
                .ok_or_else(|| ScrapeError::PatternNotFound {
                    pattern: MAIN_SCRIPT_PATTERN,
                    url: self.base_url.clone(),
                })?;
        let script_url = format!("{}{}", self.base_url, script_path.as_str());

        let script = self.fetch_text(&script_url).await?;
        let version = VERSION_RE
            .find(&script)
            .ok_or(ScrapeError::PatternNotFound {
                pattern: VERSION_PATTERN,
                url: script_url,
            })?;
        Ok(version.as_str().to_owned())
    }
}
