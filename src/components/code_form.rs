//! 验证码表单组件
//!
//! 二次验证页与确认页共用。只校验格式，不与服务端核对。

use super::layout::ErrorAlert;
use crate::config::use_config;
use crate::error::{AppError, AppResult};
use leptos::prelude::*;

/// 去除首尾空白后恰好为 `length` 位 ASCII 数字
pub fn is_valid_code(code: &str, length: usize) -> bool {
    let code = code.trim();
    code.len() == length && code.bytes().all(|b| b.is_ascii_digit())
}

#[component]
pub fn CodeForm(
    /// 提交按钮文字
    #[prop(into)]
    submit_label: String,
    /// 格式校验通过后调用，返回错误时在表单内展示
    #[prop(into)]
    on_submit: Callback<String, AppResult<()>>,
) -> impl IntoView {
    let length = use_config().code_length;
    let (code, set_code) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let handle_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = code.get().trim().to_string();

        let result = if is_valid_code(&value, length) {
            on_submit.run(value)
        } else {
            Err(AppError::InvalidCode)
        };

        if let Err(e) = result {
            console_warn!("[Auth] code rejected: {}", e.error_code());
            set_error_msg.set(Some(e.to_string()));
        }
    };

    view! {
        <form class="space-y-4" on:submit=handle_submit>
            <ErrorAlert message=error_msg />
            <input
                id="code"
                type="text"
                inputmode="numeric"
                autocomplete="one-time-code"
                maxlength=length.to_string()
                placeholder=format!("{length}-digit code")
                on:input=move |ev| set_code.set(event_target_value(&ev))
                prop:value=code
                class="w-full rounded bg-neutral-700 px-4 py-3 tracking-[0.5em] text-center text-xl"
                required
            />
            <button type="submit" class="w-full rounded bg-red-600 py-3 font-bold hover:bg-red-700">
                {submit_label}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_validation() {
        assert!(is_valid_code("123456", 6));
        assert!(is_valid_code(" 000000\n", 6));

        assert!(!is_valid_code("12345", 6));
        assert!(!is_valid_code("1234567", 6));
        assert!(!is_valid_code("12a456", 6));
        assert!(!is_valid_code("12 456", 6));
        assert!(!is_valid_code("", 6));
        // 全角数字不算
        assert!(!is_valid_code("１２３４５６", 6));

        assert!(is_valid_code("12345678", 8));
    }
}
