use crate::auth::use_auth;
use crate::config::use_config;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;

/// 首页
///
/// 没有路由守卫，未登录时同样可以访问，此时只展示登录入口。
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let config = use_config();

    let is_authenticated = auth.is_authenticated_signal();
    let user = auth.user_signal();

    let on_logout = move |_| {
        auth.logout();
        if let Err(e) = router.navigate_by_name(AppRoute::Login.name()) {
            console_error!("[Router] {}", e);
        }
    };

    let signed_out = || {
        view! {
            <div class="space-y-6">
                <h1 class="text-4xl md:text-5xl font-black">
                    "Unlimited movies, TV shows, and more"
                </h1>
                <p class="text-xl text-neutral-300">"You are not signed in."</p>
                <Link
                    to=AppRoute::Login.to_path()
                    attr:class="inline-block rounded bg-red-600 px-8 py-3 text-xl font-bold hover:bg-red-700"
                >
                    "Sign In"
                </Link>
            </div>
        }
    };

    view! {
        <div class="min-h-screen bg-black text-white font-sans">
            <nav class="flex items-center justify-between px-6 py-5 md:px-12">
                <span class="text-red-600 text-3xl md:text-4xl font-black tracking-tight">
                    {config.app_title}
                </span>
                <Show when=move || is_authenticated.get()>
                    <button
                        on:click=on_logout
                        class="rounded bg-red-600 px-4 py-1.5 text-sm font-bold hover:bg-red-700"
                    >
                        "Sign Out"
                    </button>
                </Show>
            </nav>
            <main class="flex min-h-[70vh] items-center justify-center px-4 text-center">
                <Show when=move || is_authenticated.get() fallback=signed_out>
                    <div class="space-y-4">
                        <h1 class="text-4xl md:text-5xl font-black">
                            "Welcome back, " {move || user.get().unwrap_or_default()}
                        </h1>
                        <p class="text-xl text-neutral-300">"Ready to watch?"</p>
                    </div>
                </Show>
            </main>
        </div>
    }
}
