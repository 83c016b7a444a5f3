//! 构建期配置
//!
//! 通过 `option_env!` 在编译时读取，未设置时使用默认值。
//! 这些值会被打包进 WASM，属于公开信息，不要存放密钥。

use leptos::prelude::*;

const DEFAULT_APP_TITLE: &str = "NETFLIX";
const DEFAULT_CODE_LENGTH: usize = 6;

/// 前端配置
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// 页面上展示的品牌名称
    pub app_title: String,
    /// 验证码位数（二次验证与邮件验证码共用）
    pub code_length: usize,
}

impl AppConfig {
    /// 从构建期环境变量加载配置
    pub fn load() -> Self {
        Self::from_values(
            option_env!("NETFLIX_APP_TITLE"),
            option_env!("NETFLIX_CODE_LENGTH"),
        )
    }

    fn from_values(title: Option<&str>, code_length: Option<&str>) -> Self {
        let app_title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_APP_TITLE)
            .to_string();

        let code_length = code_length
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|len| *len > 0)
            .unwrap_or(DEFAULT_CODE_LENGTH);

        Self {
            app_title,
            code_length,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

/// 从 Context 获取配置，未提供时使用默认值
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.app_title, "NETFLIX");
        assert_eq!(config.code_length, 6);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("Flix"), Some(" 8 "));
        assert_eq!(config.app_title, "Flix");
        assert_eq!(config.code_length, 8);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some("   "), Some("abc"));
        assert_eq!(config, AppConfig::default());

        let config = AppConfig::from_values(None, Some("0"));
        assert_eq!(config.code_length, 6);
    }
}
