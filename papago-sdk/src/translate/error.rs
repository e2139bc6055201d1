use reqwest::StatusCode;

use crate::fetch::FetchError;

/// 版本号抓取失败
///
/// 抓取目标是第三方前端页面，格式随时可能变化，调用方应当把这个错误当作
/// 常态处理而不是异常。
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    #[error("fetch `{url}` failed with status {status}")]
    BadStatus { url: String, status: StatusCode },
    #[error("pattern `{pattern}` not found in response of `{url}`")]
    PatternNotFound { pattern: &'static str, url: String },
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// 签发token阶段失败，和请求本身失败区分开
    #[error("mint auth token failed: {0}")]
    Auth(#[from] ScrapeError),
    #[error("request api failed: {status}\nbody: {body}")]
    RequestAPIFailed { status: StatusCode, body: String },
    #[error("`translatedText` missing in response:\n{0}")]
    MissingTranslation(String),
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),
}
