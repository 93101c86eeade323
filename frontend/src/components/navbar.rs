//! 顶部导航组件
//!
//! 店面唯一的导航入口：目录 / 购物车 / 订单 + 注销。

use crate::components::icons::{LogOut, Package, ShoppingCart};
use crate::notify::use_notify;
use crate::session::{logout, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let notify = use_notify();
    let router = use_router();

    // 当前路由对应的链接高亮
    let link_class = move |route: AppRoute| {
        if router.current_route().get() == route {
            "btn btn-ghost btn-sm btn-active"
        } else {
            "btn btn-ghost btn-sm"
        }
    };

    let on_logout = move |_| {
        logout(&session);
        notify.success("Logged out successfully!");
        // 导航由路由服务的认证状态监听自动处理
    };

    view! {
        <div class="navbar bg-base-100 shadow-md px-4">
            <div class="flex-1 gap-2">
                <Package attr:class="h-6 w-6 text-primary" />
                <a class="btn btn-ghost text-xl" on:click=move |_| router.navigate("/products")>
                    "Clothery"
                </a>
            </div>
            <div class="flex-none gap-1">
                <button
                    class=move || link_class(AppRoute::Products)
                    on:click=move |_| router.navigate("/products")
                >
                    "Products"
                </button>
                <button
                    class=move || link_class(AppRoute::Cart)
                    on:click=move |_| router.navigate("/cart")
                >
                    <ShoppingCart attr:class="h-4 w-4" /> "Cart"
                </button>
                <button
                    class=move || link_class(AppRoute::Orders)
                    on:click=move |_| router.navigate("/orders")
                >
                    "Orders"
                </button>
                <button on:click=on_logout class="btn btn-outline btn-error btn-sm gap-2 ml-2">
                    <LogOut attr:class="h-4 w-4" /> "Logout"
                </button>
            </div>
        </div>
    }
}
