use super::layout::{AuthLayout, ErrorAlert};
use crate::auth::use_auth;
use crate::error::{AppError, AppResult};
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_navigate};
use leptos::prelude::*;

/// 登录表单的非空检查：先身份标识，后密码
pub fn validate_credentials(identity: &str, password: &str) -> AppResult<()> {
    if identity.trim().is_empty() {
        return Err(AppError::EmptyIdentity);
    }
    if password.is_empty() {
        return Err(AppError::EmptyPassword);
    }
    Ok(())
}

/// 密码登录页
///
/// 密码只做非空检查；提交后记录身份标识并进入二次验证。
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (identity, set_identity) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let identity = identity.get();
        let result = validate_credentials(&identity, &password.get())
            .and_then(|()| auth.begin_sign_in(&identity));

        match result {
            Ok(()) => {
                set_error_msg.set(None);
                navigate(AppRoute::TwoFactor.to_path());
            }
            Err(e) => {
                console_warn!("[Auth] sign-in rejected: {}", e.error_code());
                set_error_msg.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <AuthLayout heading="Sign In">
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
                <input
                    id="password"
                    type="password"
                    autocomplete="current-password"
                    placeholder="Password"
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    prop:value=password
                    class="w-full rounded bg-neutral-700 px-4 py-3"
                />
                <button type="submit" class="w-full rounded bg-red-600 py-3 font-bold hover:bg-red-700">
                    "Sign In"
                </button>
            </form>
            <div class="text-center text-neutral-400">"OR"</div>
            <Link
                to=AppRoute::LoginWithCode.to_path()
                attr:class="block w-full rounded bg-neutral-600/70 py-3 text-center font-bold hover:bg-neutral-600"
            >
                "Use a Sign-In Code"
            </Link>
        </AuthLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_credentials() {
        assert_eq!(validate_credentials("", "secret"), Err(AppError::EmptyIdentity));
        assert_eq!(validate_credentials("  ", ""), Err(AppError::EmptyIdentity));
        assert_eq!(validate_credentials("a", ""), Err(AppError::EmptyPassword));
        assert_eq!(validate_credentials("alice@example.com", "hunter2"), Ok(()));
        // 密码原样检查，不去除空白
        assert_eq!(validate_credentials("alice", " "), Ok(()));
    }
}
