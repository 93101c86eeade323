//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了店面的所有路由及其访问属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面，即公共入口 (默认路由)
    #[default]
    Home,
    /// 注册页面（仅限未登录用户）
    Register,
    /// 商品目录 (需要认证)
    Products,
    /// 购物车 (需要认证)
    Cart,
    /// 结算页 (需要认证)
    Checkout,
    /// 订单历史 (需要认证)
    Orders,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Home,
            "/register" => Self::Register,
            "/products" => Self::Products,
            "/cart" => Self::Cart,
            "/checkout" => Self::Checkout,
            "/orders" => Self::Orders,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Register => "/register",
            Self::Products => "/products",
            Self::Cart => "/cart",
            Self::Checkout => "/checkout",
            Self::Orders => "/orders",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Products | Self::Cart | Self::Checkout | Self::Orders
        )
    }

    /// 定义已认证用户是否应该离开此路由（登录页 / 注册页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Home | Self::Register)
    }

    /// 获取认证失败时的重定向目标（公共入口）
    pub fn auth_failure_redirect() -> Self {
        Self::Home
    }

    /// 获取认证成功时的重定向目标（商品目录）
    pub fn auth_success_redirect() -> Self {
        Self::Products
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip_for_every_named_route() {
        for route in [
            AppRoute::Home,
            AppRoute::Register,
            AppRoute::Products,
            AppRoute::Cart,
            AppRoute::Checkout,
            AppRoute::Orders,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/cart/extra"), AppRoute::NotFound);
    }

    #[test]
    fn storefront_views_require_auth() {
        assert!(AppRoute::Products.requires_auth());
        assert!(AppRoute::Cart.requires_auth());
        assert!(AppRoute::Checkout.requires_auth());
        assert!(AppRoute::Orders.requires_auth());
        assert!(!AppRoute::Home.requires_auth());
        assert!(!AppRoute::Register.requires_auth());
        assert!(!AppRoute::NotFound.requires_auth());
    }

    #[test]
    fn public_only_routes_bounce_authenticated_users() {
        assert!(AppRoute::Home.should_redirect_when_authenticated());
        assert!(AppRoute::Register.should_redirect_when_authenticated());
        assert!(!AppRoute::Products.should_redirect_when_authenticated());
    }

    #[test]
    fn guard_redirect_targets() {
        assert_eq!(AppRoute::auth_failure_redirect(), AppRoute::Home);
        assert_eq!(AppRoute::auth_success_redirect(), AppRoute::Products);
    }
}
