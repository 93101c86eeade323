use crate::{AuthSession, Cart, Order, Product};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Whether a request with this method carries a JSON body.
    pub fn allows_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// Unlike a plain `const PATH`, `path()` is a method so endpoints with
/// dynamic segments (`/cart/remove/{productId}`, `/orders/{id}/payment`)
/// can build their URL from the request itself.
pub trait ApiRequest: Serialize + DeserializeOwned {
    /// The response type returned by this request.
    type Response: Serialize + DeserializeOwned;
    /// The HTTP method.
    const METHOD: Method;
    /// The URL path (relative to the API base).
    fn path(&self) -> String;
}

// =========================================================
// Cart Requests
// =========================================================

/// Fetch the current user's cart
#[derive(Debug, Serialize, Deserialize)]
pub struct GetCartRequest;

impl ApiRequest for GetCartRequest {
    type Response = Cart;
    const METHOD: Method = Method::Get;
    fn path(&self) -> String {
        "/cart".to_string()
    }
}

/// Add a product (or increment its quantity)
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: String,
    pub quantity: u32,
}

impl ApiRequest for AddToCartRequest {
    type Response = Cart;
    const METHOD: Method = Method::Post;
    fn path(&self) -> String {
        "/cart/add".to_string()
    }
}

/// Set the quantity of a line item
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartItemRequest {
    pub product_id: String,
    pub quantity: u32,
}

impl ApiRequest for UpdateCartItemRequest {
    type Response = Cart;
    const METHOD: Method = Method::Put;
    fn path(&self) -> String {
        "/cart/update".to_string()
    }
}

/// Remove one line item; the product id travels in the path, not the body
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RemoveFromCartRequest {
    pub product_id: String,
}

impl ApiRequest for RemoveFromCartRequest {
    type Response = Cart;
    const METHOD: Method = Method::Delete;
    fn path(&self) -> String {
        format!("/cart/remove/{}", self.product_id)
    }
}

/// Empty the cart. Exposed by the backend but unused by the checkout flow,
/// which lets the server derive the order from its own cart state.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClearCartRequest;

impl ApiRequest for ClearCartRequest {
    // The backend answers with a bare acknowledgement; nothing to decode.
    type Response = serde_json::Value;
    const METHOD: Method = Method::Delete;
    fn path(&self) -> String {
        "/cart/clear".to_string()
    }
}

// =========================================================
// Order Requests
// =========================================================

/// Create an order from the server-held cart. The body is an empty object:
/// line items and total are derived server-side for the authenticated user.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateOrderRequest {}

impl ApiRequest for CreateOrderRequest {
    type Response = Order;
    const METHOD: Method = Method::Post;
    fn path(&self) -> String {
        "/orders".to_string()
    }
}

/// List all orders for the current user (newest first, server ordering)
#[derive(Debug, Serialize, Deserialize)]
pub struct ListOrdersRequest;

impl ApiRequest for ListOrdersRequest {
    type Response = Vec<Order>;
    const METHOD: Method = Method::Get;
    fn path(&self) -> String {
        "/orders".to_string()
    }
}

/// Fetch a single order
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetOrderRequest {
    pub order_id: String,
}

impl ApiRequest for GetOrderRequest {
    type Response = Order;
    const METHOD: Method = Method::Get;
    fn path(&self) -> String {
        format!("/orders/{}", self.order_id)
    }
}

/// Mark an order as paid
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CompletePaymentRequest {
    #[serde(skip)]
    pub order_id: String,
    pub payment_method: String,
}

impl ApiRequest for CompletePaymentRequest {
    type Response = Order;
    const METHOD: Method = Method::Post;
    fn path(&self) -> String {
        format!("/orders/{}/payment", self.order_id)
    }
}

// =========================================================
// Catalog & Auth Requests
// =========================================================

/// List catalog products
#[derive(Debug, Serialize, Deserialize)]
pub struct ListProductsRequest;

impl ApiRequest for ListProductsRequest {
    type Response = Vec<Product>;
    const METHOD: Method = Method::Get;
    fn path(&self) -> String {
        "/products".to_string()
    }
}

/// Exchange credentials for a bearer token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Response = AuthSession;
    const METHOD: Method = Method::Post;
    fn path(&self) -> String {
        "/auth/login".to_string()
    }
}

/// Create an account; answers with a session like login does
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl ApiRequest for RegisterRequest {
    type Response = AuthSession;
    const METHOD: Method = Method::Post;
    fn path(&self) -> String {
        "/auth/register".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dynamic_paths_embed_identifiers() {
        let remove = RemoveFromCartRequest {
            product_id: "p42".to_string(),
        };
        assert_eq!(remove.path(), "/cart/remove/p42");

        let payment = CompletePaymentRequest {
            order_id: "o7".to_string(),
            payment_method: "card".to_string(),
        };
        assert_eq!(payment.path(), "/orders/o7/payment");
    }

    #[test]
    fn bodies_use_backend_field_names() {
        let add = AddToCartRequest {
            product_id: "p1".to_string(),
            quantity: 2,
        };
        let body = serde_json::to_value(&add).unwrap();
        assert_eq!(body, serde_json::json!({ "productId": "p1", "quantity": 2 }));
    }

    #[test]
    fn payment_body_carries_method_but_not_order_id() {
        let payment = CompletePaymentRequest {
            order_id: "o7".to_string(),
            payment_method: "card".to_string(),
        };
        let body = serde_json::to_value(&payment).unwrap();
        assert_eq!(body, serde_json::json!({ "paymentMethod": "card" }));
    }

    #[test]
    fn create_order_body_is_empty_object() {
        let body = serde_json::to_value(CreateOrderRequest {}).unwrap();
        assert_eq!(body, serde_json::json!({}));
    }

    #[test]
    fn only_post_and_put_carry_bodies() {
        assert!(Method::Post.allows_body());
        assert!(Method::Put.allows_body());
        assert!(!Method::Get.allows_body());
        assert!(!Method::Delete.allows_body());
    }
}
