//! 认证模块
//!
//! 管理用户会话状态，与路由系统解耦：路由器不读取会话，
//! 也不存在路由守卫，是否跳转完全由视图决定。
//! 会话仅存在于内存中，刷新页面即丢失。

use crate::error::{AppError, AppResult};
use leptos::prelude::*;

/// 会话状态
///
/// 单一的枚举代替 `user` + `is_authenticated` 两个字段，
/// 两者不可能出现不一致。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    /// 未登录 (初始状态)
    #[default]
    Anonymous,
    /// 已登录
    Authenticated { identity: String },
}

impl Session {
    /// 登录
    ///
    /// 身份标识去除首尾空白后存储，空标识返回 [`AppError::EmptyIdentity`]，
    /// 此时状态保持不变。
    pub fn login(&mut self, identity: &str) -> AppResult<()> {
        let identity = normalize_identity(identity)?;
        *self = Session::Authenticated { identity };
        Ok(())
    }

    /// 注销，重复调用无副作用
    pub fn logout(&mut self) {
        *self = Session::Anonymous;
    }

    pub fn user(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { identity } => Some(identity.as_str()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }
}

fn normalize_identity(identity: &str) -> AppResult<String> {
    let identity = identity.trim();
    if identity.is_empty() {
        return Err(AppError::EmptyIdentity);
    }
    Ok(identity.to_string())
}

/// 认证上下文
///
/// 在 `App` 中显式创建并通过 Context 在组件间共享。
/// 除会话外还保存登录流程中"已输入、未验证"的身份标识。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 当前会话，只能通过 `login` / `logout` 修改
    session: RwSignal<Session>,
    /// 待验证的身份标识（登录页 -> 验证页之间传递）
    pending: RwSignal<Option<String>>,
}

impl AuthContext {
    /// 创建新的认证上下文，初始为未登录
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::Anonymous),
            pending: RwSignal::new(None),
        }
    }

    /// 当前会话（只读信号）
    pub fn session(&self) -> ReadSignal<Session> {
        self.session.read_only()
    }

    /// 获取认证状态信号
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(Session::is_authenticated))
    }

    /// 获取当前用户信号
    pub fn user_signal(&self) -> Signal<Option<String>> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.user().map(str::to_string)))
    }

    /// 当前待验证的身份标识
    pub fn pending_identity(&self) -> Option<String> {
        self.pending.get()
    }

    /// 直接登录
    ///
    /// 不检查登录流程进行到哪一步，任何视图都可以调用。
    pub fn login(&self, identity: &str) -> AppResult<()> {
        let mut session = self.session.get_untracked();
        session.login(identity)?;
        if let Some(user) = session.user() {
            console_info!("[Auth] Signed in as {}", user);
        }
        self.session.set(session);
        Ok(())
    }

    /// 注销并清除未完成的登录流程
    pub fn logout(&self) {
        self.session.update(Session::logout);
        self.pending.set(None);
        console_info!("[Auth] Signed out.");
    }

    /// 开始登录流程，记录待验证的身份标识
    pub fn begin_sign_in(&self, identity: &str) -> AppResult<()> {
        let identity = normalize_identity(identity)?;
        self.pending.set(Some(identity));
        Ok(())
    }

    /// 完成登录流程：以待验证的身份标识登录
    pub fn complete_sign_in(&self) -> AppResult<()> {
        let identity = self
            .pending
            .get_untracked()
            .ok_or(AppError::NoPendingSignIn)?;
        self.login(&identity)?;
        self.pending.set(None);
        Ok(())
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
