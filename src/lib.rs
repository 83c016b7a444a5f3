//! Netflix Clone 前端应用
//!
//! 采用 Context-Driven 的架构：
//! - `web::route`: 路由表（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 会话状态管理
//! - `components`: UI 组件层

#[macro_use]
mod console;

pub mod auth;
pub mod config;
pub mod error;

mod components {
    mod code_form;
    pub mod home;
    mod layout;
    pub mod login;
    pub mod login_code;
    pub mod two_factor;
    pub mod verify;
}

pub mod web {
    pub mod route;
    pub mod router;
}

use crate::auth::AuthContext;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::login_code::LoginWithCodePage;
use crate::components::two_factor::TwoFactorPage;
use crate::components::verify::VerifyPage;
use crate::config::AppConfig;

use leptos::prelude::*;

use web::route::{AppRoute, ROUTES, validate_table};
use web::router::{Link, Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::LoginWithCode => view! { <LoginWithCodePage /> }.into_any(),
        AppRoute::TwoFactor => view! { <TwoFactorPage /> }.into_any(),
        AppRoute::Verify => view! { <VerifyPage /> }.into_any(),
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-black text-white">
                <div class="text-center space-y-4">
                    <h1 class="text-6xl font-black text-red-600">"404"</h1>
                    <p class="text-xl">"Lost your way?"</p>
                    <Link to="/" attr:class="inline-block rounded bg-white px-6 py-2 font-bold text-black">
                        "Netflix Home"
                    </Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 路由表在编译期写死，这里只做一次自检
    if let Err(e) = validate_table(&ROUTES) {
        console_error!("[Router] {}", e);
    }

    // 2. 构建期配置
    provide_context(AppConfig::load());

    // 3. 显式创建会话上下文，生命周期与标签页一致
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    view! {
        <Router>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
