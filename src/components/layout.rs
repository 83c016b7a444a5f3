//! 公共布局组件

use crate::config::use_config;
use crate::web::router::Link;
use leptos::prelude::*;

/// 登录流程页面的外框：品牌栏 + 居中卡片
#[component]
pub fn AuthLayout(
    /// 卡片标题
    #[prop(into)]
    heading: String,
    children: Children,
) -> impl IntoView {
    let config = use_config();

    view! {
        <div class="min-h-screen bg-black text-white font-sans">
            <header class="px-6 py-5 md:px-12">
                <Link to="/" attr:class="text-red-600 text-3xl md:text-4xl font-black tracking-tight">
                    {config.app_title}
                </Link>
            </header>
            <main class="flex justify-center px-4 pb-16">
                <div class="w-full max-w-md bg-neutral-900/80 rounded-md p-8 md:p-14 space-y-6">
                    <h1 class="text-3xl font-bold">{heading}</h1>
                    {children()}
                </div>
            </main>
        </div>
    }
}

/// 内联错误提示，消息为空时不渲染
#[component]
pub fn ErrorAlert(message: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div role="alert" class="rounded bg-amber-600 px-4 py-3 text-sm">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
