//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 导航流程："解析 -> 规划 -> 写入 History -> 更新信号"。
//! 路由器不感知认证状态，没有守卫。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, find_by_name, resolve};
use crate::error::{AppError, AppResult};

/// 获取当前浏览器路径（包含 query 与 fragment）
fn current_path() -> String {
    web_sys::window()
        .map(|w| {
            let location = w.location();
            let mut path = location.pathname().unwrap_or_else(|_| "/".to_string());
            path.push_str(&location.search().unwrap_or_default());
            path.push_str(&location.hash().unwrap_or_default());
            path
        })
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 一次导航的规划结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// 要渲染的路由
    pub route: AppRoute,
    /// 写入地址栏的 URL
    pub url: String,
    /// 是否经过重定向
    pub redirected: bool,
}

impl Navigation {
    /// 地址栏当前为 `current` 时，是否需要改写为规范的 `url`
    ///
    /// 重定向、大小写不同、多余的结尾 `/` 都会触发改写。
    pub fn rewrites(&self, current: &str) -> bool {
        self.url != current
    }
}

/// 规划导航
///
/// - 匹配成功：URL 改写为规范 path，保留原始的 query 与 fragment
/// - 未匹配：渲染 `NotFound`，地址栏保持请求的 URL
pub fn plan_navigation(path: &str) -> Navigation {
    match resolve(path) {
        Ok(resolution) => {
            let suffix = path.find(['?', '#']).map(|i| &path[i..]).unwrap_or("");
            Navigation {
                route: resolution.route,
                url: format!("{}{}", resolution.path, suffix),
                redirected: resolution.redirected,
            }
        }
        Err(e) => {
            match &e {
                AppError::RouteNotFound(_) => console_warn!("[Router] {}", e),
                _ => console_error!("[Router] {}", e),
            }
            Navigation {
                route: AppRoute::NotFound,
                url: path.to_string(),
                redirected: false,
            }
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
}

impl RouterService {
    /// 创建新的路由服务，并按当前 URL 初始化路由
    fn new() -> Self {
        let path = current_path();
        let nav = plan_navigation(&path);
        if nav.rewrites(&path) {
            replace_history_state(&nav.url);
        }
        let (current_route, set_route) = signal(nav.route);

        Self {
            current_route,
            set_route,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航**
    ///
    /// 重定向在写入 History 之前完成，因此历史记录中只会出现最终地址。
    pub fn navigate(&self, path: &str) {
        let nav = plan_navigation(path);

        if nav.rewrites(&current_path()) {
            push_history_state(&nav.url);
        }
        console_info!("[Router] {} -> {}", path, nav.route.name());
        self.set_route.set(nav.route);
    }

    /// 按路由名称导航
    pub fn navigate_by_name(&self, name: &str) -> AppResult<()> {
        let route = find_by_name(name).ok_or_else(|| AppError::RouteNotFound(name.to_string()))?;
        self.navigate(route.to_path());
        Ok(())
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            let path = current_path();
            let nav = plan_navigation(&path);
            if nav.rewrites(&path) {
                replace_history_state(&nav.url);
            }
            set_route.set(nav.route);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router() -> RouterService {
    let router = RouterService::new();
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// 导航函数（返回一个可调用的闭包）
pub fn use_navigate() -> impl Fn(&str) + Clone + Copy {
    let router = use_router();
    move |to: &str| {
        router.navigate(to);
    }
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router();

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接
///
/// 拦截点击，通过路由服务导航而不是整页刷新。
/// 样式通过 `attr:class` 透传到 `<a>` 上。
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: leptos::web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to on:click=on_click>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_known_route() {
        let nav = plan_navigation("/2fa");
        assert_eq!(
            nav,
            Navigation {
                route: AppRoute::TwoFactor,
                url: "/2fa".into(),
                redirected: false,
            }
        );
    }

    #[test]
    fn test_plan_root_redirect_rewrites_url() {
        let nav = plan_navigation("/");
        assert_eq!(nav.route, AppRoute::Login);
        assert_eq!(nav.url, "/login");
        assert!(nav.redirected);
    }

    #[test]
    fn test_plan_keeps_query_and_fragment() {
        let nav = plan_navigation("/?ref=email#top");
        assert_eq!(nav.url, "/login?ref=email#top");

        let nav = plan_navigation("/Verify/?step=2");
        assert_eq!(nav.route, AppRoute::Verify);
        assert_eq!(nav.url, "/verify?step=2");
    }

    #[test]
    fn test_non_canonical_url_is_rewritten() {
        let nav = plan_navigation("/HOME/");
        assert_eq!(nav.route, AppRoute::Home);
        assert_eq!(nav.url, "/home");
        assert!(!nav.redirected);
        assert!(nav.rewrites("/HOME/"));

        // 已经是规范地址时不改写
        let nav = plan_navigation("/home");
        assert!(!nav.rewrites("/home"));

        let nav = plan_navigation("/");
        assert!(nav.rewrites("/"));
    }

    #[test]
    fn test_plan_unknown_route_keeps_url() {
        let nav = plan_navigation("/browse/title/42");
        assert_eq!(nav.route, AppRoute::NotFound);
        assert_eq!(nav.url, "/browse/title/42");
        assert!(!nav.redirected);
        assert!(!nav.rewrites("/browse/title/42"));
    }
}
