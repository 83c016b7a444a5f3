use super::layout::{AuthLayout, ErrorAlert};
use crate::auth::use_auth;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_navigate};
use leptos::prelude::*;

/// 验证码登录页：输入身份标识后直接进入确认页
#[component]
pub fn LoginWithCodePage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (identity, set_identity) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        match auth.begin_sign_in(&identity.get()) {
            Ok(()) => {
                set_error_msg.set(None);
                navigate(AppRoute::Verify.to_path());
            }
            Err(e) => set_error_msg.set(Some(e.to_string())),
        }
    };

    view! {
        <AuthLayout heading="Sign In">
            <p class="text-neutral-400">
                "Enter your email or phone number and we'll send you a code to sign in."
            </p>
            <form class="space-y-4" on:submit=on_submit>
                <ErrorAlert message=error_msg />
                <input
                    id="identity"
                    type="text"
                    autocomplete="username"
                    placeholder="Email or phone number"
                    on:input=move |ev| set_identity.set(event_target_value(&ev))
                    prop:value=identity
                    class="w-full rounded bg-neutral-700 px-4 py-3"
                />
                <button type="submit" class="w-full rounded bg-red-600 py-3 font-bold hover:bg-red-700">
                    "Send Sign-In Code"
                </button>
            </form>
            <Link to=AppRoute::Login.to_path() attr:class="block text-center hover:underline">
                "Use Password"
            </Link>
        </AuthLayout>
    }
}
