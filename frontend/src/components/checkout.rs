use crate::api::ApiError;
use crate::components::navbar::Navbar;
use crate::notify::use_notify;
use crate::session::{expire, use_session};
use crate::web::router::use_router;
use clothery_shared::Cart;
use clothery_shared::money::{format_usd, line_total};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 结算页
///
/// 进入时重新拉取购物车：空车或拉取失败都回到购物车页，
/// 没有可买的东西时结算不可达。下单请求不携带任何载荷，
/// 行项目与总额由服务端依据它持有的购物车推导。
#[component]
pub fn CheckoutPage() -> impl IntoView {
    let session = use_session();
    let notify = use_notify();
    let router = use_router();

    let (cart, set_cart) = signal(Option::<Cart>::None);
    let (loading, set_loading) = signal(true);
    let (placing, set_placing) = signal(false);

    // 进入时校验购物车
    Effect::new(move |_| {
        let state = session.state.get();
        if !state.is_authenticated || state.is_loading {
            return;
        }
        if let Some(api) = state.api.as_ref() {
            let api = api.clone();
            spawn_local(async move {
                match api.get_cart().await {
                    Ok(data) if data.is_empty() => {
                        notify.error("Your cart is empty");
                        router.navigate("/cart");
                    }
                    Ok(data) => set_cart.set(Some(data)),
                    Err(ApiError::Unauthorized) => {
                        notify.error("Please login to continue");
                        expire(&session);
                    }
                    Err(_) => {
                        notify.error("Failed to load cart");
                        router.navigate("/cart");
                    }
                }
                set_loading.set(false);
            });
        }
    });

    let place_order = move |_| {
        // 请求在途期间禁止重复提交（纯 UI 防抖）
        if placing.get_untracked() {
            return;
        }
        let state = session.state.get_untracked();
        if let Some(api) = state.api.as_ref() {
            let api = api.clone();
            set_placing.set(true);
            spawn_local(async move {
                match api.create_order().await {
                    Ok(_) => {
                        notify.success("Order placed successfully!");
                        router.navigate("/orders");
                    }
                    Err(ApiError::Unauthorized) => {
                        notify.error("Please login to continue");
                        expire(&session);
                    }
                    // 失败时留在结算页，可重试
                    Err(_) => notify.error("Failed to place order"),
                }
                set_placing.set(false);
            });
        }
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />
            <Show when=move || !loading.get() fallback=|| view! {
                <div class="flex justify-center py-16">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }>
                <Show when=move || cart.get().is_some()>
                    <div class="max-w-4xl mx-auto p-4 md:p-8 space-y-6">
                        <h1 class="text-3xl font-bold">"Checkout"</h1>

                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body">
                                <h2 class="card-title">"Order Summary"</h2>
                                <div class="divide-y divide-base-200">
                                    <For
                                        each=move || cart.get().map(|c| c.items).unwrap_or_default()
                                        key=|item| item.product.id.clone()
                                        children=move |item| {
                                            view! {
                                                <div class="flex justify-between items-center py-3">
                                                    <div>
                                                        <h3 class="font-semibold">{item.product.name.clone()}</h3>
                                                        <p class="text-base-content/60 text-sm">
                                                            {format!("{} x {}", format_usd(item.price), item.quantity)}
                                                        </p>
                                                    </div>
                                                    <div class="font-semibold">
                                                        {format_usd(line_total(item.price, item.quantity))}
                                                    </div>
                                                </div>
                                            }
                                        }
                                    />
                                </div>
                            </div>
                        </div>

                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body flex-row justify-between items-center">
                                <span class="text-xl font-semibold">"Total Amount:"</span>
                                <span class="text-2xl font-bold">
                                    {move || cart.get().map(|c| format_usd(c.total_amount)).unwrap_or_default()}
                                </span>
                            </div>
                        </div>

                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body">
                                <h2 class="card-title">"Payment Information"</h2>
                                <p class="text-base-content/60">
                                    "Your order will be placed with status \"Pending\". You can complete payment later from your order history."
                                </p>
                                <div class="flex gap-4 mt-4">
                                    <button
                                        class="btn btn-success flex-1 text-lg"
                                        on:click=place_order
                                        disabled=move || placing.get()
                                    >
                                        {move || if placing.get() {
                                            view! { <span class="loading loading-spinner"></span> "Placing Order..." }.into_any()
                                        } else {
                                            "Place Order".into_any()
                                        }}
                                    </button>
                                    <button
                                        class="btn btn-ghost"
                                        on:click=move |_| router.navigate("/cart")
                                        disabled=move || placing.get()
                                    >
                                        "Back to Cart"
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
