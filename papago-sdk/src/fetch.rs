//! 注入的HTTP传输能力
//!
//! sdk本身不直接发起请求，所有GET/POST都通过[`HttpFetcher`]完成。默认实现
//! [`ReqwestFetcher`]基于reqwest，测试或者自定义传输（超时、代理等）时可以
//! 注入自己的实现。超时、取消由注入的实现负责，这一层不做重试。

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use url::form_urlencoded;

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("transport error: {0}")]
    Transport(String),
}

/// 请求体，发送时由传输层编码
pub enum RequestBody<'a> {
    /// application/x-www-form-urlencoded
    Form(&'a [(&'a str, &'a str)]),
}

impl RequestBody<'_> {
    pub fn encode(&self) -> String {
        match self {
            RequestBody::Form(pairs) => form_urlencoded::Serializer::new(String::new())
                .extend_pairs(*pairs)
                .finish(),
        }
    }
}

pub struct FetchRequest<'a> {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<RequestBody<'a>>,
}

impl FetchRequest<'_> {
    pub fn get() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

pub struct FetchResponse {
    pub status: StatusCode,
    pub body: String,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

#[async_trait::async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn fetch(
        &self,
        url: &str,
        request: FetchRequest<'_>,
    ) -> Result<FetchResponse, FetchError>;
}

#[derive(Default)]
pub struct ReqwestFetcher {
    http_client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn fetch(
        &self,
        url: &str,
        request: FetchRequest<'_>,
    ) -> Result<FetchResponse, FetchError> {
        let mut builder = self.http_client.request(request.method, url);
        if let Some(body) = &request.body {
            builder = builder.body(body.encode());
        }
        let resp = builder.headers(request.headers).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        Ok(FetchResponse { status, body })
    }
}
