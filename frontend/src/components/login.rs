use crate::api::{StoreApi, api_base};
use crate::components::icons::Package;
use crate::session::{establish, use_session};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 登录页（公共入口 "/")
///
/// 登录成功后不手动导航：会话信号翻转，路由服务自动转到商品目录。
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let is_loading = move || session.state.get().is_loading;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            // 登录前还没有令牌，用匿名客户端换取会话
            let api = StoreApi::anonymous(api_base());
            match api
                .login(email.get_untracked(), password.get_untracked())
                .await
            {
                Ok(auth) => establish(&session, auth.access_token),
                Err(_) => set_error_msg.set(Some(
                    "Login failed. Check your email and password.".to_string(),
                )),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <Show when=move || !is_loading() fallback=|| view! { <div class="flex items-center justify-center min-h-screen"><span class="loading loading-spinner loading-lg text-primary"></span></div> }>
            <div class="hero min-h-screen bg-base-200">
                <div class="hero-content flex-col w-full max-w-md">
                    <div class="text-center mb-4">
                        <div class="flex flex-col items-center gap-2">
                            <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                                <Package attr:class="h-8 w-8" />
                            </div>
                            <h1 class="text-3xl font-bold">"Clothery"</h1>
                            <p class="text-base-content/70">
                                "Sign in to start shopping"
                            </p>
                        </div>
                    </div>

                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit>
                            <Show when=move || error_msg.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || error_msg.get().unwrap()}</span>
                                </div>
                            </Show>

                            <div class="form-control">
                                <label class="label" for="email">
                                    <span class="label-text">"Email"</span>
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    placeholder="you@example.com"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="password">
                                    <span class="label-text">"Password"</span>
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    placeholder="••••••••"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control mt-6">
                                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                    } else {
                                        "Sign In".into_any()
                                    }}
                                </button>
                            </div>
                            <p class="text-center text-sm mt-2">
                                "No account yet? "
                                <a class="link link-primary" on:click=move |_| router.navigate("/register")>
                                    "Create one"
                                </a>
                            </p>
                        </form>
                    </div>
                </div>
            </div>
        </Show>
    }
}
