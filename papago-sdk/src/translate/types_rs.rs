use serde::Deserialize;

/// 翻译接口的响应，只关心`translatedText`，其它字段忽略
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: Option<String>,
}
