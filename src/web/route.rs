//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的路由表以及 path -> 视图 的解析规则。

use std::collections::HashSet;
use std::fmt::Display;

use crate::error::{AppError, AppResult};

/// 单次解析最多跟随的重定向次数
pub const MAX_REDIRECTS: usize = 8;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 密码登录 (默认路由)
    #[default]
    Login,
    /// 验证码登录
    LoginWithCode,
    /// 二次验证
    TwoFactor,
    /// 确认验证码
    Verify,
    /// 首页
    Home,
    /// 页面未找到（不在路由表中）
    NotFound,
}

/// 路由表条目的目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// 渲染视图
    View(AppRoute),
    /// 重定向到另一个 path
    Redirect(&'static str),
}

/// 路由表条目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    /// 命名路由；重定向条目没有名称
    pub name: Option<&'static str>,
    pub target: RouteTarget,
}

impl RouteEntry {
    pub const fn view(path: &'static str, name: &'static str, route: AppRoute) -> Self {
        Self {
            path,
            name: Some(name),
            target: RouteTarget::View(route),
        }
    }

    pub const fn redirect(path: &'static str, to: &'static str) -> Self {
        Self {
            path,
            name: None,
            target: RouteTarget::Redirect(to),
        }
    }
}

/// 应用路由表（按声明顺序匹配）
pub static ROUTES: [RouteEntry; 6] = [
    RouteEntry::redirect("/", "/login"),
    RouteEntry::view("/login", "Login", AppRoute::Login),
    RouteEntry::view("/login-code", "LoginWithCode", AppRoute::LoginWithCode),
    RouteEntry::view("/2fa", "TwoFactor", AppRoute::TwoFactor),
    RouteEntry::view("/verify", "Verify", AppRoute::Verify),
    RouteEntry::view("/home", "Home", AppRoute::Home),
];

/// 解析结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// 最终渲染的路由
    pub route: AppRoute,
    /// 最终条目的规范 path
    pub path: &'static str,
    /// 是否经过了重定向
    pub redirected: bool,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举，未匹配时返回 `NotFound`
    pub fn from_path(path: &str) -> Self {
        resolve(path).map(|r| r.route).unwrap_or(Self::NotFound)
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::LoginWithCode => "/login-code",
            Self::TwoFactor => "/2fa",
            Self::Verify => "/verify",
            Self::Home => "/home",
            Self::NotFound => "/404",
        }
    }

    /// 路由名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::LoginWithCode => "LoginWithCode",
            Self::TwoFactor => "TwoFactor",
            Self::Verify => "Verify",
            Self::Home => "Home",
            Self::NotFound => "NotFound",
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// 规范化请求的 path
///
/// 去掉 query string 与 fragment，忽略结尾的 `/`，空 path 视为 `/`。
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// 在应用路由表中解析 path
pub fn resolve(path: &str) -> AppResult<Resolution> {
    resolve_in(&ROUTES, path)
}

/// 在给定路由表中解析 path
///
/// 匹配不区分 ASCII 大小写；重定向最多跟随 [`MAX_REDIRECTS`] 次。
pub fn resolve_in(entries: &[RouteEntry], path: &str) -> AppResult<Resolution> {
    let requested = normalize_path(path);
    let mut current = requested;
    let mut redirected = false;

    for _ in 0..=MAX_REDIRECTS {
        let entry = entries
            .iter()
            .find(|e| e.path.eq_ignore_ascii_case(current))
            .ok_or_else(|| AppError::RouteNotFound(requested.to_string()))?;

        match entry.target {
            RouteTarget::View(route) => {
                return Ok(Resolution {
                    route,
                    path: entry.path,
                    redirected,
                });
            }
            RouteTarget::Redirect(to) => {
                redirected = true;
                current = normalize_path(to);
            }
        }
    }

    Err(AppError::RedirectLoop(requested.to_string()))
}

/// 按名称查找路由
pub fn find_by_name(name: &str) -> Option<AppRoute> {
    ROUTES.iter().find_map(|e| match (e.name, e.target) {
        (Some(n), RouteTarget::View(route)) if n == name => Some(route),
        _ => None,
    })
}

/// 校验路由表约束
///
/// - path 唯一（不区分大小写）
/// - 名称唯一
/// - 有且仅有一个 `/` 条目，且它是重定向
/// - 所有重定向最终都能落到视图上
pub fn validate_table(entries: &[RouteEntry]) -> AppResult<()> {
    let mut paths = HashSet::new();
    let mut names = HashSet::new();

    for entry in entries {
        if !paths.insert(entry.path.to_ascii_lowercase()) {
            return Err(AppError::InvalidRouteTable(format!(
                "duplicate path {}",
                entry.path
            )));
        }
        if let Some(name) = entry.name {
            if !names.insert(name) {
                return Err(AppError::InvalidRouteTable(format!(
                    "duplicate name {name}"
                )));
            }
        }
    }

    match entries.iter().find(|e| e.path == "/") {
        Some(RouteEntry {
            target: RouteTarget::Redirect(_),
            ..
        }) => {}
        Some(_) => {
            return Err(AppError::InvalidRouteTable(
                "root entry must be a redirect".into(),
            ));
        }
        None => return Err(AppError::InvalidRouteTable("missing root entry".into())),
    }

    for entry in entries {
        if let RouteTarget::Redirect(_) = entry.target {
            resolve_in(entries, entry.path).map_err(|e| {
                AppError::InvalidRouteTable(format!("redirect at {} is broken: {e}", entry.path))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_path_resolves_to_its_view() {
        let cases = [
            ("/login", AppRoute::Login),
            ("/login-code", AppRoute::LoginWithCode),
            ("/2fa", AppRoute::TwoFactor),
            ("/verify", AppRoute::Verify),
            ("/home", AppRoute::Home),
        ];

        for (path, expected) in cases {
            let resolution = resolve(path).unwrap();
            assert_eq!(resolution.route, expected, "path {path}");
            assert_eq!(resolution.path, path);
            assert!(!resolution.redirected);
            // path 与枚举双向一致
            assert_eq!(expected.to_path(), path);
        }
    }

    #[test]
    fn test_root_redirects_to_login() {
        let resolution = resolve("/").unwrap();
        assert_eq!(resolution.route, AppRoute::Login);
        assert_eq!(resolution.path, "/login");
        assert!(resolution.redirected);

        // 空 path 与带 query 的根路径同样重定向
        assert_eq!(resolve("").unwrap().path, "/login");
        assert_eq!(resolve("/?next=home").unwrap().path, "/login");
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let err = resolve("/browse").unwrap_err();
        assert_eq!(err, AppError::RouteNotFound("/browse".into()));
        assert_eq!(AppRoute::from_path("/browse"), AppRoute::NotFound);
        // NotFound 自身的 path 也不在路由表中
        assert_eq!(AppRoute::from_path("/404"), AppRoute::NotFound);
    }

    #[test]
    fn test_normalization() {
        assert_eq!(normalize_path("/verify/"), "/verify");
        assert_eq!(normalize_path("/2fa?code=1#top"), "/2fa");
        assert_eq!(normalize_path("///"), "/");

        assert_eq!(AppRoute::from_path("/HOME"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/login-code/"), AppRoute::LoginWithCode);
        assert_eq!(resolve("/Login").unwrap().path, "/login");
    }

    #[test]
    fn test_find_by_name() {
        assert_eq!(find_by_name("TwoFactor"), Some(AppRoute::TwoFactor));
        assert_eq!(find_by_name("Home"), Some(AppRoute::Home));
        assert_eq!(find_by_name("NotFound"), None);
        assert_eq!(find_by_name("home"), None);

        for entry in ROUTES.iter() {
            if let (Some(name), RouteTarget::View(route)) = (entry.name, entry.target) {
                assert_eq!(route.name(), name);
            }
        }
    }

    #[test]
    fn test_app_table_is_valid() {
        assert_eq!(ROUTES.len(), 6);
        validate_table(&ROUTES).unwrap();

        let roots: Vec<_> = ROUTES.iter().filter(|e| e.path == "/").collect();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].target, RouteTarget::Redirect("/login"));
        assert_eq!(roots[0].name, None);
    }

    #[test]
    fn test_validate_rejects_broken_tables() {
        let duplicate_path = [
            RouteEntry::redirect("/", "/a"),
            RouteEntry::view("/a", "A", AppRoute::Login),
            RouteEntry::view("/A", "B", AppRoute::Home),
        ];
        assert!(matches!(
            validate_table(&duplicate_path),
            Err(AppError::InvalidRouteTable(_))
        ));

        let duplicate_name = [
            RouteEntry::redirect("/", "/a"),
            RouteEntry::view("/a", "A", AppRoute::Login),
            RouteEntry::view("/b", "A", AppRoute::Home),
        ];
        assert!(validate_table(&duplicate_name).is_err());

        let root_is_view = [RouteEntry::view("/", "Root", AppRoute::Home)];
        assert!(validate_table(&root_is_view).is_err());

        let missing_root = [RouteEntry::view("/a", "A", AppRoute::Login)];
        assert!(validate_table(&missing_root).is_err());

        let dangling = [RouteEntry::redirect("/", "/nowhere")];
        assert!(validate_table(&dangling).is_err());
    }

    #[test]
    fn test_redirect_cycle_is_detected() {
        let cyclic = [
            RouteEntry::redirect("/", "/a"),
            RouteEntry::redirect("/a", "/"),
        ];
        assert_eq!(
            resolve_in(&cyclic, "/"),
            Err(AppError::RedirectLoop("/".into()))
        );
        assert!(validate_table(&cyclic).is_err());
    }

    #[test]
    fn test_display_renders_path() {
        assert_eq!(AppRoute::Verify.to_string(), "/verify");
        assert_eq!(AppRoute::default(), AppRoute::Login);
    }
}
