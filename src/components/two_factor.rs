use super::code_form::CodeForm;
use super::layout::AuthLayout;
use crate::auth::use_auth;
use crate::error::AppResult;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_navigate};
use leptos::prelude::*;

/// 二次验证页：输入身份验证器中的验证码
#[component]
pub fn TwoFactorPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let on_code = move |_code: String| -> AppResult<()> {
        navigate(AppRoute::Verify.to_path());
        Ok(())
    };

    view! {
        <AuthLayout heading="Two-Step Verification">
            <p class="text-neutral-400">
                "Enter the code from your authenticator app"
                {move || auth.pending_identity().map(|id| format!(" for {id}"))}
                "."
            </p>
            <CodeForm submit_label="Continue" on_submit=on_code />
            <Link to=AppRoute::Login.to_path() attr:class="block text-center hover:underline">
                "Back to Sign In"
            </Link>
        </AuthLayout>
    }
}
