//! Cookie 封装模块
//!
//! 使用 `web_sys::HtmlDocument` 读写 `document.cookie`。
//! 会话令牌就放在这里：客户端只检查它是否存在，不校验有效性。

use wasm_bindgen::JsCast;

/// Cookie 操作封装
///
/// 提供静态方法访问浏览器 Cookie API。
pub struct CookieJar;

impl CookieJar {
    /// 获取 HtmlDocument 实例
    fn document() -> Option<web_sys::HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
    }

    /// 按名称读取 Cookie 值
    ///
    /// # 返回
    /// - `Some(String)` 如果该 Cookie 存在
    /// - `None` 如果不存在或发生错误
    pub fn get(name: &str) -> Option<String> {
        let raw = Self::document()?.cookie().ok()?;
        find_cookie(&raw, name)
    }

    /// 写入 Cookie（作用域为整个站点）
    pub fn set(name: &str, value: &str) -> bool {
        Self::document()
            .and_then(|doc| doc.set_cookie(&format!("{}={}; path=/", name, value)).ok())
            .is_some()
    }

    /// 删除 Cookie（通过写入已过期的同名条目）
    pub fn delete(name: &str) -> bool {
        Self::document()
            .and_then(|doc| {
                doc.set_cookie(&format!(
                    "{}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT",
                    name
                ))
                .ok()
            })
            .is_some()
    }
}

/// 在 `document.cookie` 格式的字符串中查找指定名称的值
fn find_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::find_cookie;

    #[test]
    fn finds_named_cookie_among_several() {
        let raw = "theme=dark; accessToken=abc.def.ghi; lang=en";
        assert_eq!(
            find_cookie(raw, "accessToken"),
            Some("abc.def.ghi".to_string())
        );
    }

    #[test]
    fn missing_cookie_is_none() {
        assert_eq!(find_cookie("theme=dark", "accessToken"), None);
        assert_eq!(find_cookie("", "accessToken"), None);
    }

    #[test]
    fn name_match_is_exact() {
        // "accessTokenOld" 不应命中 "accessToken"
        let raw = "accessTokenOld=stale; other=1";
        assert_eq!(find_cookie(raw, "accessToken"), None);
    }

    #[test]
    fn value_may_contain_equals_sign() {
        let raw = "accessToken=a=b=c";
        assert_eq!(find_cookie(raw, "accessToken"), Some("a=b=c".to_string()));
    }
}
