use std::collections::HashMap;

use bon::Builder;
use papago_sdk_common::helper::into_header_map;
use reqwest::Method;

use super::types_rs::TranslateResponse;
use super::{Client, Error};
use crate::fetch::{FetchRequest, RequestBody};

#[derive(Builder)]
pub struct Translate<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    /// 源语言，接口接受`auto`自动检测
    source: &'a str,
    target: &'a str,
    text: &'a str,
}

impl Translate<'_> {
    pub async fn send(&self) -> Result<String, Error> {
        let client = self.client;
        let url = client.translate_url();
        // 签名的url必须和实际请求的url一致
        let auth = client.minter.mint(&url).await?;

        let form = [
            ("deviceId", auth.request_id.as_str()),
            ("locale", self.target),
            ("dict", "false"),
            ("dictDisplay", "30"),
            ("honorific", "false"),
            ("instant", "false"),
            ("paging", "false"),
            ("source", self.source),
            ("target", self.target),
            ("text", self.text),
            ("usageAgreed", "false"),
        ];

        let mut headers = HashMap::new();
        headers.insert(
            "Authorization".to_owned(),
            format!("PPG {}:{}", auth.request_id, auth.digest),
        );
        headers.insert(
            "Content-Type".to_owned(),
            "application/x-www-form-urlencoded; charset=UTF-8".to_owned(),
        );
        headers.insert("Timestamp".to_owned(), auth.timestamp.to_string());
        headers.insert("Device-Type".to_owned(), "pc".to_owned());
        headers.insert("X-Apigw-Partnerid".to_owned(), "papago".to_owned());

        let resp = client
            .fetcher
            .fetch(
                &url,
                FetchRequest {
                    method: Method::POST,
                    headers: into_header_map(headers),
                    body: Some(RequestBody::Form(&form)),
                },
            )
            .await?;

        if !resp.is_success() {
            return Err(Error::RequestAPIFailed {
                status: resp.status,
                body: resp.body,
            });
        }

        let translated = serde_json::from_str::<TranslateResponse>(&resp.body)
            .ok()
            .and_then(|r| r.translated_text)
            .filter(|t| !t.is_empty());
        match translated {
            Some(text) => Ok(text),
            None => Err(Error::MissingTranslation(resp.body)),
        }
    }
}
