use crate::api::ApiError;
use crate::components::icons::{CreditCard, RefreshCw};
use crate::components::navbar::Navbar;
use crate::notify::use_notify;
use crate::session::{expire, use_session};
use crate::web::router::use_router;
use clothery_shared::money::{format_usd, line_total};
use clothery_shared::{DEFAULT_PAYMENT_METHOD, Order, OrderStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 订单状态对应的徽章样式
fn status_badge_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge badge-warning",
        OrderStatus::Processing => "badge badge-info",
        OrderStatus::Shipped => "badge badge-secondary",
        OrderStatus::Delivered => "badge badge-success",
        OrderStatus::Cancelled => "badge badge-error",
        OrderStatus::Unknown => "badge badge-ghost",
    }
}

/// 订单历史页
///
/// 支付成功后整表重拉，不做本地乐观修补。
#[component]
pub fn OrdersPage() -> impl IntoView {
    let session = use_session();
    let notify = use_notify();
    let router = use_router();

    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (loading, set_loading) = signal(true);

    let load_orders = move || {
        let state = session.state.get_untracked();
        if let Some(api) = state.api.as_ref() {
            let api = api.clone();
            spawn_local(async move {
                match api.get_orders().await {
                    Ok(data) => set_orders.set(data),
                    Err(ApiError::Unauthorized) => {
                        notify.error("Please login to view your orders");
                        expire(&session);
                    }
                    Err(_) => notify.error("Failed to load orders"),
                }
                set_loading.set(false);
            });
        }
    };

    // 初始加载
    Effect::new(move |_| {
        let state = session.state.get();
        if state.is_authenticated && !state.is_loading {
            load_orders();
        }
    });

    let complete_payment = move |order_id: String| {
        let state = session.state.get_untracked();
        if let Some(api) = state.api.as_ref() {
            let api = api.clone();
            spawn_local(async move {
                match api
                    .complete_payment(order_id, DEFAULT_PAYMENT_METHOD.to_string())
                    .await
                {
                    Ok(_) => {
                        notify.success("Payment successful!");
                        load_orders();
                    }
                    Err(ApiError::Unauthorized) => {
                        notify.error("Please login to complete payment");
                        expire(&session);
                    }
                    Err(_) => notify.error("Payment failed"),
                }
            });
        }
    };

    let total_orders = move || orders.with(|o| o.len());

    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />
            <div class="max-w-6xl mx-auto p-4 md:p-8 space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-3xl font-bold">"Order History"</h1>
                    <button
                        on:click=move |_| load_orders()
                        disabled=move || loading.get()
                        class="btn btn-ghost btn-circle"
                    >
                        <RefreshCw attr:class=move || if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                    </button>
                </div>

                <Show when=move || !(loading.get() && total_orders() == 0) fallback=|| view! {
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }>
                    <Show when=move || { total_orders() > 0 } fallback=move || view! {
                        <div class="card bg-base-100 shadow-md p-8 text-center space-y-4">
                            <p class="text-xl text-base-content/60">"No orders yet"</p>
                            <div>
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| router.navigate("/products")
                                >
                                    "Start Shopping"
                                </button>
                            </div>
                        </div>
                    }>
                        <div class="space-y-6">
                            <For
                                each=move || orders.get()
                                key=|order| order.id.clone()
                                children=move |order| {
                                    let title = format!("Order #{}", order.short_id());
                                    let date = order.created_at.format("%b %d, %Y").to_string();
                                    let status_text = order.status.to_string().to_uppercase();
                                    let badge = status_badge_class(order.status);
                                    let is_paid = order.is_paid;

                                    let items = order
                                        .products
                                        .iter()
                                        .map(|item| view! {
                                            <div class="flex justify-between items-center py-2">
                                                <div>
                                                    <span class="font-medium">{item.name.clone()}</span>
                                                    <span class="text-base-content/60 ml-2">
                                                        {format!("x{}", item.quantity)}
                                                    </span>
                                                </div>
                                                <span>{format_usd(line_total(item.price, item.quantity))}</span>
                                            </div>
                                        })
                                        .collect_view();

                                    // 支付动作仅对「未支付且未取消」的订单提供
                                    let pay_button = if order.can_complete_payment() {
                                        let pay_id = order.id.clone();
                                        Some(view! {
                                            <button
                                                class="btn btn-success btn-block mt-4 gap-2"
                                                on:click=move |_| complete_payment(pay_id.clone())
                                            >
                                                <CreditCard attr:class="h-4 w-4" />
                                                "Complete Payment"
                                            </button>
                                        })
                                    } else {
                                        None
                                    };

                                    view! {
                                        <div class="card bg-base-100 shadow-xl">
                                            <div class="card-body">
                                                <div class="flex justify-between items-start">
                                                    <div>
                                                        <h2 class="text-xl font-semibold">{title}</h2>
                                                        <p class="text-base-content/60 text-sm">{date}</p>
                                                    </div>
                                                    <div class="text-right space-y-1">
                                                        <span class=badge>{status_text}</span>
                                                        <Show when=move || is_paid>
                                                            <p class="text-success text-sm">"✓ Paid"</p>
                                                        </Show>
                                                    </div>
                                                </div>

                                                <div class="border-t border-base-200 pt-4">{items}</div>

                                                <div class="border-t border-base-200 mt-4 pt-4 flex justify-between items-center">
                                                    <span class="text-xl font-bold">"Total:"</span>
                                                    <span class="text-2xl font-bold">
                                                        {format_usd(order.total_amount)}
                                                    </span>
                                                </div>

                                                {pay_button}
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
