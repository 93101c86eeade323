use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod envelope;
pub mod money;
pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 会话令牌所在的 Cookie 名称
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// 默认支付方式
pub const DEFAULT_PAYMENT_METHOD: &str = "card";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================
//
// 字段名与后端的 JSON 约定保持一致（`_id`、`totalAmount` 等），
// 客户端不做任何本地校验：购物车与订单均以服务端返回为准。

/// 购物车行项目内嵌的商品快照
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductSnapshot {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
}

/// 购物车行项目
///
/// `price` 为加入购物车时捕获的单价，与商品当前价格解耦。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartItem {
    #[serde(rename = "productId")]
    pub product: ProductSnapshot,
    pub quantity: u32,
    pub price: f64,
}

/// 购物车
///
/// `total_amount` 由服务端计算，客户端原样渲染，从不自行重算。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub items: Vec<CartItem>,
    pub total_amount: f64,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 购物车数量更新是否允许发出
///
/// 低于 1 的目标数量不构成合法更新：调用方静默忽略，
/// 不发请求也不改状态。减到零应当走删除操作。
pub fn quantity_update_allowed(requested: i64) -> bool {
    requested >= 1
}

/// 商品目录条目
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
}

/// 订单行项目（下单时的快照，与在售商品记录解耦）
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// 订单状态
///
/// 状态流转完全由服务端掌控；客户端只渲染收到的值。
/// 未知状态映射到 `Unknown`，避免新增状态导致反序列化失败。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        };
        write!(f, "{}", label)
    }
}

/// 订单
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub products: Vec<OrderItem>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub is_paid: bool,
    #[serde(default)]
    pub payment_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub payment_method: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// 是否可以发起「完成支付」操作
    ///
    /// 当且仅当订单未支付且未被取消。
    pub fn can_complete_payment(&self) -> bool {
        !self.is_paid && self.status != OrderStatus::Cancelled
    }

    /// 订单号的短形式（取 id 末 8 位用于展示）
    pub fn short_id(&self) -> &str {
        let start = self.id.len().saturating_sub(8);
        &self.id[start..]
    }
}

/// 登录/注册成功后返回的会话
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_fixture(status: &str, is_paid: bool) -> Order {
        serde_json::from_value(serde_json::json!({
            "_id": "64f0c2a9e1b2c3d4e5f60718",
            "userId": "u1",
            "products": [
                { "productId": "p1", "name": "Denim Jacket", "price": 49.5, "quantity": 1 }
            ],
            "totalAmount": 49.5,
            "status": status,
            "isPaid": is_paid,
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-01T10:00:00Z"
        }))
        .expect("order fixture should decode")
    }

    #[test]
    fn cart_decodes_backend_shape() {
        let cart: Cart = serde_json::from_value(serde_json::json!({
            "_id": "c1",
            "userId": "u1",
            "items": [{
                "productId": { "_id": "p1", "name": "Linen Shirt", "price": 10.0, "image": "" },
                "quantity": 2,
                "price": 10.0
            }],
            "totalAmount": 20.0
        }))
        .unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].product.name, "Linen Shirt");
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.total_amount, 20.0);
        assert!(!cart.is_empty());
    }

    #[test]
    fn quantity_updates_below_one_are_rejected() {
        assert!(!quantity_update_allowed(0));
        assert!(!quantity_update_allowed(-1));
        assert!(!quantity_update_allowed(i64::MIN));
        assert!(quantity_update_allowed(1));
        assert!(quantity_update_allowed(2));
    }

    #[test]
    fn unknown_status_still_decodes() {
        let order = order_fixture("refund_requested", false);
        assert_eq!(order.status, OrderStatus::Unknown);
        assert_eq!(order.status.to_string(), "unknown");
    }

    #[test]
    fn payment_offered_only_when_unpaid_and_not_cancelled() {
        assert!(order_fixture("pending", false).can_complete_payment());
        assert!(order_fixture("shipped", false).can_complete_payment());
        assert!(!order_fixture("pending", true).can_complete_payment());
        assert!(!order_fixture("cancelled", false).can_complete_payment());
        assert!(!order_fixture("cancelled", true).can_complete_payment());
    }

    #[test]
    fn short_id_takes_last_eight_chars() {
        let order = order_fixture("pending", false);
        assert_eq!(order.short_id(), "e5f60718");

        let mut tiny = order.clone();
        tiny.id = "abc".to_string();
        assert_eq!(tiny.short_id(), "abc");
    }

    #[test]
    fn payment_fields_default_when_absent() {
        let order = order_fixture("delivered", true);
        assert!(order.payment_date.is_none());
        assert!(order.payment_method.is_none());
    }
}
