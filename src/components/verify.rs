use super::code_form::CodeForm;
use super::layout::AuthLayout;
use crate::auth::use_auth;
use crate::error::{AppError, AppResult};
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_navigate};
use leptos::prelude::*;

/// 确认页：输入发送到邮箱/手机的验证码，完成登录后进入首页
#[component]
pub fn VerifyPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let on_code = move |_code: String| -> AppResult<()> {
        auth.complete_sign_in()?;
        navigate(AppRoute::Home.to_path());
        Ok(())
    };

    let expired = || {
        view! {
            <div role="alert" class="rounded bg-amber-600 px-4 py-3 text-sm">
                {AppError::NoPendingSignIn.to_string()}
            </div>
            <Link
                to=AppRoute::Login.to_path()
                attr:class="block w-full rounded bg-red-600 py-3 text-center font-bold hover:bg-red-700"
            >
                "Back to Sign In"
            </Link>
        }
    };

    view! {
        <AuthLayout heading="Enter the code we sent you">
            <Show when=move || auth.pending_identity().is_some() fallback=expired>
                <p class="text-neutral-400">
                    "We sent a sign-in code to "
                    <span class="font-bold text-white">
                        {move || auth.pending_identity().unwrap_or_default()}
                    </span>
                    "."
                </p>
                <CodeForm submit_label="Sign In" on_submit=on_code />
            </Show>
        </AuthLayout>
    }
}
