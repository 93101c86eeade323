use crate::api::ApiError;
use crate::components::icons::{Minus, Plus, Trash2};
use crate::components::navbar::Navbar;
use crate::notify::use_notify;
use crate::session::{expire, use_session};
use crate::web::router::use_router;
use clothery_shared::money::{format_usd, line_total};
use clothery_shared::{Cart, quantity_update_allowed};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 购物车页
///
/// 展示的总额永远来自最近一次成功的服务端响应，本地从不推测性重算。
#[component]
pub fn CartPage() -> impl IntoView {
    let session = use_session();
    let notify = use_notify();
    let router = use_router();

    let (cart, set_cart) = signal(Option::<Cart>::None);
    let (loading, set_loading) = signal(true);

    let load_cart = move || {
        let state = session.state.get_untracked();
        if let Some(api) = state.api.as_ref() {
            let api = api.clone();
            spawn_local(async move {
                match api.get_cart().await {
                    Ok(data) => set_cart.set(Some(data)),
                    Err(ApiError::Unauthorized) => {
                        notify.error("Please login to view your cart");
                        expire(&session);
                    }
                    // 拉取失败：通知即可，已展示的状态保持不变
                    Err(_) => notify.error("Failed to load cart"),
                }
                set_loading.set(false);
            });
        }
    };

    // 初始加载
    Effect::new(move |_| {
        let state = session.state.get();
        if state.is_authenticated && !state.is_loading {
            load_cart();
        }
    });

    let set_quantity = move |product_id: String, requested: i64| {
        // 数量低于 1 的更新静默忽略：不发请求，状态不变
        if !quantity_update_allowed(requested) {
            return;
        }
        let state = session.state.get_untracked();
        if let Some(api) = state.api.as_ref() {
            let api = api.clone();
            spawn_local(async move {
                match api.update_cart_item(product_id, requested as u32).await {
                    Ok(updated) => {
                        // 只用服务端返回的购物车替换本地状态
                        set_cart.set(Some(updated));
                        notify.success("Cart updated");
                    }
                    Err(ApiError::Unauthorized) => {
                        notify.error("Please login to update your cart");
                        expire(&session);
                    }
                    Err(_) => notify.error("Failed to update cart"),
                }
            });
        }
    };

    let remove_item = move |product_id: String| {
        let state = session.state.get_untracked();
        if let Some(api) = state.api.as_ref() {
            let api = api.clone();
            spawn_local(async move {
                match api.remove_from_cart(product_id).await {
                    Ok(updated) => {
                        set_cart.set(Some(updated));
                        notify.success("Item removed from cart");
                    }
                    Err(ApiError::Unauthorized) => {
                        notify.error("Please login to update your cart");
                        expire(&session);
                    }
                    Err(_) => notify.error("Failed to remove item"),
                }
            });
        }
    };

    let is_empty = move || cart.get().map(|c| c.is_empty()).unwrap_or(true);
    let total_text = move || {
        cart.get()
            .map(|c| format_usd(c.total_amount))
            .unwrap_or_default()
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />
            <Show when=move || !loading.get() fallback=|| view! {
                <div class="flex justify-center py-16">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }>
                <Show when=move || !is_empty() fallback=move || view! {
                    // 空购物车是独立的视图，引导回目录
                    <div class="flex flex-col items-center justify-center py-24 gap-4">
                        <h1 class="text-3xl font-bold">"Your Cart is Empty"</h1>
                        <button
                            class="btn btn-primary"
                            on:click=move |_| router.navigate("/products")
                        >
                            "Continue Shopping"
                        </button>
                    </div>
                }>
                    <div class="max-w-6xl mx-auto p-4 md:p-8 space-y-6">
                        <h1 class="text-3xl font-bold">"Shopping Cart"</h1>

                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body divide-y divide-base-200">
                                <For
                                    each=move || cart.get().map(|c| c.items).unwrap_or_default()
                                    key=|item| item.product.id.clone()
                                    children=move |item| {
                                        let id_minus = item.product.id.clone();
                                        let id_plus = item.product.id.clone();
                                        let id_remove = item.product.id.clone();
                                        let quantity = item.quantity;
                                        let image = if item.product.image.is_empty() {
                                            "/placeholder.png".to_string()
                                        } else {
                                            item.product.image.clone()
                                        };

                                        view! {
                                            <div class="flex items-center gap-4 py-4">
                                                <img
                                                    src=image
                                                    alt=item.product.name.clone()
                                                    class="w-24 h-24 object-cover rounded"
                                                />
                                                <div class="flex-1">
                                                    <h3 class="text-lg font-semibold">{item.product.name.clone()}</h3>
                                                    <p class="text-base-content/60">{format_usd(item.price)}</p>
                                                </div>
                                                <div class="flex items-center gap-2">
                                                    <button
                                                        class="btn btn-sm btn-square"
                                                        on:click=move |_| set_quantity(id_minus.clone(), quantity as i64 - 1)
                                                    >
                                                        <Minus attr:class="h-4 w-4" />
                                                    </button>
                                                    <span class="px-3 font-mono">{quantity}</span>
                                                    <button
                                                        class="btn btn-sm btn-square"
                                                        on:click=move |_| set_quantity(id_plus.clone(), quantity as i64 + 1)
                                                    >
                                                        <Plus attr:class="h-4 w-4" />
                                                    </button>
                                                </div>
                                                <div class="text-lg font-semibold w-24 text-right">
                                                    {format_usd(line_total(item.price, item.quantity))}
                                                </div>
                                                <button
                                                    class="btn btn-error btn-sm btn-square"
                                                    on:click=move |_| remove_item(id_remove.clone())
                                                >
                                                    <Trash2 attr:class="h-4 w-4" />
                                                </button>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        </div>

                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body">
                                <div class="flex justify-between items-center mb-4">
                                    <span class="text-xl font-semibold">"Total:"</span>
                                    <span class="text-2xl font-bold">{total_text}</span>
                                </div>
                                <button
                                    class="btn btn-success btn-block text-lg"
                                    on:click=move |_| router.navigate("/checkout")
                                >
                                    "Proceed to Checkout"
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
