//! Papago网页版文本翻译
//!
//! 网页API没有公开文档，认证依赖从前端抓取的版本号（见[`ScriptVersionResolver`]），
//! 每次调用`translate`都会重新走一遍 主页 → 脚本 → 翻译接口 的流程，
//! 不缓存token、不重试。

use std::sync::Arc;

use bon::bon;

mod error;
pub use error::{Error, ScrapeError};

mod token;
pub use token::{AuthTriple, TokenMinter, sign_token};

mod version;
pub use version::{ScriptVersionResolver, VersionResolver};

mod trans;
mod types_rs;
pub use trans::{Translate, TranslateBuilder};
pub use types_rs::*;

use crate::fetch::{HttpFetcher, ReqwestFetcher};

const PAPAGO_BASE_URL: &str = "https://papago.naver.com";
const TRANSLATE_PATH: &str = "/apis/n2mt/translate";

pub struct Client {
    base_url: String,
    fetcher: Arc<dyn HttpFetcher>,
    minter: TokenMinter,
}

#[bon]
impl Client {
    /// `fetcher`和`version_resolver`不传则使用reqwest和默认的前端抓取实现
    #[builder(on(String, into))]
    pub fn new(
        #[builder(default = PAPAGO_BASE_URL.to_owned())] base_url: String,
        fetcher: Option<Arc<dyn HttpFetcher>>,
        version_resolver: Option<Arc<dyn VersionResolver>>,
    ) -> Self {
        let fetcher = fetcher.unwrap_or_else(|| Arc::new(ReqwestFetcher::new()));
        let resolver = version_resolver.unwrap_or_else(|| {
            Arc::new(ScriptVersionResolver::new(base_url.clone(), fetcher.clone()))
        });
        Self {
            base_url,
            fetcher,
            minter: TokenMinter::new(resolver),
        }
    }

    pub fn translate(&self) -> TranslateBuilder<'_> {
        Translate::builder(self)
    }

    pub(crate) fn translate_url(&self) -> String {
        format!("{}{}", self.base_url, TRANSLATE_PATH)
    }
}
