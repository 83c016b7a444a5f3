use std::fmt;

// =========================================================
// 应用错误类型
// =========================================================

/// 前端领域错误
///
/// 路由解析与认证流程共用同一个错误类型，视图直接展示 `Display` 文本。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 路由表中没有匹配的路径
    RouteNotFound(String),
    /// 重定向链超过上限（通常是循环）
    RedirectLoop(String),
    /// 路由表自身不满足约束（启动时校验）
    InvalidRouteTable(String),
    /// 身份标识为空
    EmptyIdentity,
    /// 密码为空
    EmptyPassword,
    /// 尚未开始登录流程就尝试完成验证
    NoPendingSignIn,
    /// 验证码格式错误
    InvalidCode,
}

impl AppError {
    /// 机器可读的错误代码
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::RouteNotFound(_) => "ROUTE_NOT_FOUND",
            AppError::RedirectLoop(_) => "REDIRECT_LOOP",
            AppError::InvalidRouteTable(_) => "INVALID_ROUTE_TABLE",
            AppError::EmptyIdentity => "EMPTY_IDENTITY",
            AppError::EmptyPassword => "EMPTY_PASSWORD",
            AppError::NoPendingSignIn => "NO_PENDING_SIGN_IN",
            AppError::InvalidCode => "INVALID_CODE",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::RouteNotFound(path) => write!(f, "No page found at {path}"),
            AppError::RedirectLoop(path) => write!(f, "Too many redirects starting at {path}"),
            AppError::InvalidRouteTable(reason) => write!(f, "Invalid route table: {reason}"),
            AppError::EmptyIdentity => write!(f, "Please enter your email or phone number"),
            AppError::EmptyPassword => write!(f, "Please enter your password"),
            AppError::NoPendingSignIn => write!(f, "Your sign-in session expired. Please start again"),
            AppError::InvalidCode => write!(f, "Please enter a valid code"),
        }
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_contains_path() {
        let err = AppError::RouteNotFound("/movies".into());
        assert_eq!(err.to_string(), "No page found at /movies");
        assert_eq!(err.error_code(), "ROUTE_NOT_FOUND");
    }
}
