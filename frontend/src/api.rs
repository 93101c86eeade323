//! API 客户端模块
//!
//! 对远端 REST 后端的薄封装：为每个请求附加 Bearer 令牌、
//! 透明解开响应信封、把传输/状态错误映射为类型化的 [`ApiError`]。
//! 不重试、不超时、不缓存。

use crate::serde_helper;
use crate::web::HttpClient;
use clothery_shared::envelope::unwrap_envelope;
use clothery_shared::protocol::{
    AddToCartRequest, ApiRequest, ClearCartRequest, CompletePaymentRequest, CreateOrderRequest,
    GetCartRequest, GetOrderRequest, ListOrdersRequest, ListProductsRequest, LoginRequest,
    Method, RegisterRequest, RemoveFromCartRequest, UpdateCartItemRequest,
};
use clothery_shared::{AuthSession, Cart, Order, Product};

/// 编译期注入的后端基址，对应部署环境的 `CLOTHERY_API_URL`
const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// 获取后端基址
pub fn api_base() -> String {
    option_env!("CLOTHERY_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}

/// API 调用错误
///
/// 401 在这里统一映射为 `Unauthorized`，各视图对它做同一件事：
/// 使会话过期并回到公共入口。其余错误一律降级为用户可见的通知。
#[derive(Debug)]
pub enum ApiError {
    /// 后端拒绝了令牌 (401)
    Unauthorized,
    /// 其他非 2xx 状态
    Status { code: u16, message: String },
    /// 传输失败（请求未到达或未返回）
    Network(String),
    /// 响应体无法按预期类型解码
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "unauthorized"),
            ApiError::Status { code, .. } => write!(f, "request failed with status {}", code),
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Decode(msg) => write!(f, "decode error: {}", msg),
        }
    }
}

/// 店面 API 客户端
///
/// `token` 为 `None` 时（登录/注册前）不附加 Authorization 头。
#[derive(Clone, Debug, PartialEq)]
pub struct StoreApi {
    base_url: String,
    token: Option<String>,
}

impl StoreApi {
    /// 创建已认证的客户端
    pub fn new(base_url: String, token: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            token: Some(token),
        }
    }

    /// 创建未认证的客户端（仅用于登录/注册）
    pub fn anonymous(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            token: None,
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 执行一个类型化的 API 请求
    ///
    /// 端点元数据（方法、路径、响应类型）全部来自 [`ApiRequest`] 实现。
    async fn execute<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ApiError> {
        let url = self.url(&request.path());

        let mut builder = match R::METHOD {
            Method::Get => HttpClient::get(&url),
            Method::Post => HttpClient::post(&url),
            Method::Put => HttpClient::put(&url),
            Method::Delete => HttpClient::delete(&url),
        };

        if let Some(token) = &self.token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        if R::METHOD.allows_body() {
            let body = serde_helper::to_json_string(request)
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            builder = builder.header("Content-Type", "application/json").body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status() == 401 {
            return Err(ApiError::Unauthorized);
        }

        if !response.ok() {
            let code = response.status();
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { code, message });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        // 部分端点成功时返回空响应体
        let body = if text.trim().is_empty() {
            "null".to_string()
        } else {
            text
        };

        unwrap_envelope(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    // =====================================================
    // 购物车
    // =====================================================

    /// 获取当前用户的购物车
    pub async fn get_cart(&self) -> Result<Cart, ApiError> {
        self.execute(&GetCartRequest).await
    }

    /// 添加商品（或累加数量）
    pub async fn add_to_cart(&self, product_id: String, quantity: u32) -> Result<Cart, ApiError> {
        self.execute(&AddToCartRequest {
            product_id,
            quantity,
        })
        .await
    }

    /// 设置行项目数量
    pub async fn update_cart_item(
        &self,
        product_id: String,
        quantity: u32,
    ) -> Result<Cart, ApiError> {
        self.execute(&UpdateCartItemRequest {
            product_id,
            quantity,
        })
        .await
    }

    /// 移除一个行项目
    pub async fn remove_from_cart(&self, product_id: String) -> Result<Cart, ApiError> {
        self.execute(&RemoveFromCartRequest { product_id }).await
    }

    // 清空购物车（后端提供，当前流程未使用）
    #[allow(dead_code)]
    pub async fn clear_cart(&self) -> Result<(), ApiError> {
        self.execute(&ClearCartRequest).await.map(|_| ())
    }

    // =====================================================
    // 订单
    // =====================================================

    /// 从服务端持有的购物车创建订单（请求体为空对象）
    pub async fn create_order(&self) -> Result<Order, ApiError> {
        self.execute(&CreateOrderRequest {}).await
    }

    /// 获取订单历史
    pub async fn get_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.execute(&ListOrdersRequest).await
    }

    // 获取单个订单（后端提供，当前流程未使用）
    #[allow(dead_code)]
    pub async fn get_order(&self, order_id: String) -> Result<Order, ApiError> {
        self.execute(&GetOrderRequest { order_id }).await
    }

    /// 标记订单已支付
    pub async fn complete_payment(
        &self,
        order_id: String,
        payment_method: String,
    ) -> Result<Order, ApiError> {
        self.execute(&CompletePaymentRequest {
            order_id,
            payment_method,
        })
        .await
    }

    // =====================================================
    // 目录与认证
    // =====================================================

    /// 获取商品目录
    pub async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        self.execute(&ListProductsRequest).await
    }

    /// 登录，换取会话令牌
    pub async fn login(&self, email: String, password: String) -> Result<AuthSession, ApiError> {
        self.execute(&LoginRequest { email, password }).await
    }

    /// 注册新账户，成功后同样返回会话令牌
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> Result<AuthSession, ApiError> {
        self.execute(&RegisterRequest {
            name,
            email,
            password,
        })
        .await
    }
}
