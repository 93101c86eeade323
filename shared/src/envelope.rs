//! 响应信封解包模块
//!
//! 后端的部分接口把载荷包在 `{ "data": ... }` 信封里，部分接口直接
//! 返回裸载荷。客户端统一在这里透明解包：`data` 字段存在且非 null
//! 时取其内容，否则把整个响应体当作载荷。

use serde::de::DeserializeOwned;
use serde_json::Value;

/// 解码可能带信封的 JSON 响应体
pub fn unwrap_envelope<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
    let mut value: Value = serde_json::from_str(body)?;

    // 对应 `res.data || res`：data 为 null 时回退到整个响应体
    let data = value
        .get_mut("data")
        .filter(|d| !d.is_null())
        .map(Value::take);

    serde_json::from_value(data.unwrap_or(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cart;

    #[test]
    fn unwraps_data_field() {
        let body = r#"{ "data": { "ok": true } }"#;
        let value: Value = unwrap_envelope(body).unwrap();
        assert_eq!(value, serde_json::json!({ "ok": true }));
    }

    #[test]
    fn passes_bare_payload_through() {
        let body = r#"[1, 2, 3]"#;
        let value: Vec<u32> = unwrap_envelope(body).unwrap();
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn null_data_falls_back_to_whole_body() {
        let body = r#"{ "data": null, "flag": 7 }"#;
        let value: Value = unwrap_envelope(body).unwrap();
        assert_eq!(value["flag"], 7);
    }

    #[test]
    fn wrapped_cart_decodes() {
        let body = r#"{
            "data": {
                "_id": "c1",
                "userId": "u1",
                "items": [],
                "totalAmount": 0.0
            }
        }"#;
        let cart: Cart = unwrap_envelope(body).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total_amount, 0.0);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(unwrap_envelope::<Value>("not json").is_err());
    }
}
