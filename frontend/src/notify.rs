//! 通知模块
//!
//! 所有异步操作的失败都在视图层降级为一条 toast 通知；
//! 这里提供共享的通知上下文与顶层的 Toast 组件。

use leptos::prelude::*;
use std::time::Duration;

/// 通知上下文
///
/// 内容为 (消息, 是否出错)。同一时刻只展示一条，后来者覆盖前者。
#[derive(Clone, Copy)]
pub struct NotifyContext {
    message: ReadSignal<Option<(String, bool)>>,
    set_message: WriteSignal<Option<(String, bool)>>,
}

impl NotifyContext {
    pub fn new() -> Self {
        let (message, set_message) = signal(Option::<(String, bool)>::None);
        Self {
            message,
            set_message,
        }
    }

    /// 成功通知
    pub fn success(&self, message: impl Into<String>) {
        self.set_message.set(Some((message.into(), false)));
    }

    /// 失败通知
    pub fn error(&self, message: impl Into<String>) {
        self.set_message.set(Some((message.into(), true)));
    }
}

/// 从 Context 获取通知上下文
pub fn use_notify() -> NotifyContext {
    use_context::<NotifyContext>().expect("NotifyContext should be provided")
}

/// Toast 浮层组件
///
/// 挂在 App 根部；3 秒后自动消失。
#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_notify();
    let message = ctx.message;
    let set_message = ctx.set_message;

    // 3秒后清除通知
    Effect::new(move |_| {
        if message.get().is_some() {
            set_timeout(move || set_message.set(None), Duration::from_secs(3));
        }
    });

    view! {
        <Show when=move || message.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let (_, is_err) = message.get().unwrap();
                    if is_err {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || message.get().unwrap().0}</span>
                </div>
            </div>
        </Show>
    }
}
