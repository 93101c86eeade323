use crate::api::ApiError;
use crate::components::icons::{RefreshCw, ShoppingCart};
use crate::components::navbar::Navbar;
use crate::notify::use_notify;
use crate::session::{expire, use_session};
use clothery_shared::Product;
use clothery_shared::money::format_usd;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 商品目录页
#[component]
pub fn ProductsPage() -> impl IntoView {
    let session = use_session();
    let notify = use_notify();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);

    let load_products = move || {
        let state = session.state.get_untracked();
        if let Some(api) = state.api.as_ref() {
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.get_products().await {
                    Ok(data) => set_products.set(data),
                    Err(ApiError::Unauthorized) => {
                        notify.error("Please login to browse products");
                        expire(&session);
                    }
                    Err(_) => notify.error("Failed to load products"),
                }
                set_loading.set(false);
            });
        }
    };

    // 初始加载
    Effect::new(move |_| {
        let state = session.state.get();
        if state.is_authenticated && !state.is_loading {
            load_products();
        }
    });

    let total_products = move || products.with(|p| p.len());

    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />
            <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-3xl font-bold">"All Products"</h1>
                        <p class="text-base-content/70 text-sm">
                            {move || format!("{} products found", total_products())}
                        </p>
                    </div>
                    <button
                        on:click=move |_| load_products()
                        disabled=move || loading.get()
                        class="btn btn-ghost btn-circle"
                    >
                        <RefreshCw attr:class=move || if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                    </button>
                </div>

                <Show when=move || !(loading.get() && total_products() == 0) fallback=|| view! {
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }>
                    <Show when=move || { total_products() > 0 } fallback=|| view! {
                        <div class="card bg-base-100 shadow-md p-8 text-center text-base-content/50">
                            "No products available. Check back later."
                        </div>
                    }>
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                            <For
                                each=move || products.get()
                                key=|p| p.id.clone()
                                children=move |product| {
                                    // 每张卡片独立的「加入中」状态，双击防抖
                                    let (adding, set_adding) = signal(false);
                                    let product_id = product.id.clone();

                                    let add_to_cart = move |_| {
                                        if adding.get_untracked() {
                                            return;
                                        }
                                        let state = session.state.get_untracked();
                                        if let Some(api) = state.api.as_ref() {
                                            let api = api.clone();
                                            let product_id = product_id.clone();
                                            set_adding.set(true);
                                            spawn_local(async move {
                                                match api.add_to_cart(product_id, 1).await {
                                                    Ok(_) => notify.success("Added to cart!"),
                                                    Err(ApiError::Unauthorized) => {
                                                        notify.error("Please login to add items to cart");
                                                        expire(&session);
                                                    }
                                                    Err(_) => notify.error("Failed to add to cart"),
                                                }
                                                set_adding.set(false);
                                            });
                                        }
                                    };

                                    let image = if product.image.is_empty() {
                                        "/placeholder.png".to_string()
                                    } else {
                                        product.image.clone()
                                    };

                                    view! {
                                        <div class="card bg-base-100 shadow-xl">
                                            <figure class="h-48 bg-base-300">
                                                <img src=image alt=product.name.clone() class="object-cover h-full w-full" />
                                            </figure>
                                            <div class="card-body p-4">
                                                <h2 class="card-title text-base">{product.name.clone()}</h2>
                                                <p class="text-sm text-base-content/60 line-clamp-2">
                                                    {product.description.clone()}
                                                </p>
                                                <div class="card-actions items-center justify-between mt-2">
                                                    <span class="text-lg font-bold">{format_usd(product.price)}</span>
                                                    <button
                                                        on:click=add_to_cart
                                                        disabled=move || adding.get()
                                                        class="btn btn-primary btn-sm gap-2"
                                                    >
                                                        <ShoppingCart attr:class="h-4 w-4" />
                                                        {move || if adding.get() { "Adding..." } else { "Add to Cart" }}
                                                    </button>
                                                </div>
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
