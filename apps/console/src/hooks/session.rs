use dioxus::prelude::*;

use crate::session::{LoginError, Session};
use crate::state::{use_app_actions, AppActions};

#[derive(Clone)]
pub struct SessionHandle {
    session: Session,
    actions: AppActions,
}

impl SessionHandle {
    pub fn login(&self, username: &str, password: &str) -> Result<(), LoginError> {
        self.session.login(username, password)?;
        self.actions.set_logged_in(true);
        self.actions.clear_operation_status();
        Ok(())
    }

    /// 清除持久化标记，同时清空选择、搜索与筛选。
    pub fn logout(&self) {
        self.session.logout();
        self.actions.logout();
    }
}

pub fn use_session() -> SessionHandle {
    SessionHandle {
        session: use_context::<Session>(),
        actions: use_app_actions(),
    }
}
