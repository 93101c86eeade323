//! 会话模块
//!
//! 管理用户会话状态，与路由系统解耦。
//! 令牌以 Cookie 形式持有；这里只在组合边界检查它的**存在性**，
//! 有效性由后端裁决：任何视图收到 401 时统一调用 [`expire`]。

use crate::api::{StoreApi, api_base};
use crate::web::CookieJar;
use clothery_shared::ACCESS_TOKEN_COOKIE;
use leptos::prelude::*;

/// 会话状态
#[derive(Clone, Default)]
pub struct SessionState {
    /// API 客户端实例（仅在持有令牌时存在）
    pub api: Option<StoreApi>,
    /// 是否已认证（仅表示令牌存在）
    pub is_authenticated: bool,
    /// 是否正在初始化
    pub is_loading: bool,
}

/// 会话上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// 会话状态（只读）
    pub state: ReadSignal<SessionState>,
    /// 设置会话状态（写入）
    pub set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    /// 创建新的会话上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState {
            is_loading: true,
            ..SessionState::default()
        });
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 初始化会话状态
///
/// 在应用启动时读取一次 Cookie；之后所有视图都通过会话对象
/// 拿到 API 客户端，而不是各自去读存储。
pub fn init_session(ctx: &SessionContext) {
    let token = CookieJar::get(ACCESS_TOKEN_COOKIE);
    ctx.set_state.update(|state| {
        state.is_loading = false;
        if let Some(token) = token {
            state.api = Some(StoreApi::new(api_base(), token));
            state.is_authenticated = true;
        }
    });
}

/// 登录/注册成功后建立会话
///
/// 把令牌写入 Cookie 并更新内存状态；
/// 导航由路由服务监听认证信号自动完成。
pub fn establish(ctx: &SessionContext, token: String) {
    CookieJar::set(ACCESS_TOKEN_COOKIE, &token);
    ctx.set_state.update(|state| {
        state.api = Some(StoreApi::new(api_base(), token));
        state.is_authenticated = true;
        state.is_loading = false;
    });
}

/// 注销并清除状态
pub fn logout(ctx: &SessionContext) {
    CookieJar::delete(ACCESS_TOKEN_COOKIE);
    ctx.set_state.update(|state| {
        state.api = None;
        state.is_authenticated = false;
    });
    // 注意：不需要手动导航，路由服务会监听认证状态变化并自动重定向
}

/// 会话过期（后端返回 401 时的统一处理）
///
/// 效果与注销相同；单独命名是为了让调用点的意图可读。
pub fn expire(ctx: &SessionContext) {
    web_sys::console::log_1(&"[Session] Backend rejected token, expiring session.".into());
    logout(ctx);
}
