//! Clothery 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎，含集中式会话守卫）
//! - `session`: 会话状态管理（令牌存在性检查 + 统一的 401 处理）
//! - `notify`: 全局 toast 通知
//! - `api`: REST 后端的薄客户端
//! - `components`: UI 组件层

mod api;
mod components {
    pub mod cart;
    pub mod checkout;
    mod icons;
    pub mod login;
    mod navbar;
    pub mod orders;
    pub mod products;
    pub mod register;
}
mod notify;
mod serde_helper;
mod session;

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod cookie;
    mod http;
    pub mod route;
    pub mod router;

    pub use cookie::CookieJar;
    pub use http::HttpClient;
}

use crate::components::cart::CartPage;
use crate::components::checkout::CheckoutPage;
use crate::components::login::LoginPage;
use crate::components::orders::OrdersPage;
use crate::components::products::ProductsPage;
use crate::components::register::RegisterPage;
use crate::notify::{NotifyContext, Toast};
use crate::session::{SessionContext, init_session};
use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Products => view! { <ProductsPage /> }.into_any(),
        AppRoute::Cart => view! { <CartPage /> }.into_any(),
        AppRoute::Checkout => view! { <CheckoutPage /> }.into_any(),
        AppRoute::Orders => view! { <OrdersPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建会话与通知上下文
    let session_ctx = SessionContext::new();
    provide_context(session_ctx);

    let notify_ctx = NotifyContext::new();
    provide_context(notify_ctx);

    // 2. 初始化会话状态（从 Cookie 读取令牌，只读一次）
    init_session(&session_ctx);

    // 3. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = session_ctx.is_authenticated_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <Toast />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
