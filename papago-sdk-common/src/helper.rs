use hmac::{Hmac, Mac};
use md5::Md5;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;
use time::OffsetDateTime;

/// 当前UTC时间的毫秒时间戳
pub fn timestamp_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

pub fn into_header_map(map: HashMap<String, String>) -> HeaderMap {
    map.iter()
        .map(|(k, v)| {
            let name = HeaderName::from_bytes(k.as_bytes()).unwrap();
            let value = HeaderValue::from_bytes(v.as_bytes()).unwrap();
            (name, value)
        })
        .collect()
}

/// HMAC-MD5，key直接使用UTF-8字节，不做hex解码
pub fn sign_hmac_md5(key: &str, str_to_sign: &str) -> Vec<u8> {
    type HmacMd5 = Hmac<Md5>;
    // Hmac对key长度没有限制，new_from_slice不会失败
    let mut mac = HmacMd5::new_from_slice(key.as_bytes()).unwrap();
    mac.update(str_to_sign.as_bytes());
    mac.finalize().into_bytes().to_vec()
}
