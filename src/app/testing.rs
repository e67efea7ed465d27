//! Rendering helpers for component tests.

use std::rc::Rc;

use admin_wire::{AdminUser, RunRecord, TokenResponse};
use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::history::{History, MemoryHistory};
use dioxus::prelude::*;
use serde_json::Value;

use super::{Console, Services};
use crate::api::{AdminApi, ApiError};
use crate::config::DEFAULT_RUNS_PAGE_SIZE;
use crate::session::SessionStore;

/// API that answers every call without a network.
pub struct StaticApi;

#[async_trait(?Send)]
impl AdminApi for StaticApi {
    async fn request_otp(&self, _phone_number: &str) -> Result<Value, ApiError> {
        Ok(Value::Null)
    }

    async fn verify_otp(&self, _phone_number: &str, _otp: &str) -> Result<TokenResponse, ApiError> {
        Ok(TokenResponse {
            access_token: "tok-abc".to_string(),
            token_type: "bearer".to_string(),
        })
    }

    async fn list_runs(&self) -> Result<Vec<RunRecord>, ApiError> {
        Ok(Vec::new())
    }

    async fn list_runs_page(&self, _page_size: u8) -> Result<Vec<RunRecord>, ApiError> {
        Ok(Vec::new())
    }

    async fn current_user(&self) -> Result<AdminUser, ApiError> {
        Ok(AdminUser {
            name: "Super Admin".to_string(),
            role: "admin".to_string(),
        })
    }
}

pub fn test_services(session: Rc<dyn SessionStore>) -> Services {
    Services {
        api: Rc::new(StaticApi),
        session,
        runs_page_size: DEFAULT_RUNS_PAGE_SIZE,
    }
}

/// Build, let effects and tasks run until nothing is dirty, then render.
pub fn render_settled(mut dom: VirtualDom) -> String {
    dom.rebuild_in_place();
    for _ in 0..8 {
        dom.render_immediate(&mut NoOpMutations);
    }
    dioxus_ssr::render(&dom)
}

/// The routed console mounted at `path`.
pub struct MountedConsole {
    pub html: String,
    pub history: Rc<MemoryHistory>,
}

impl MountedConsole {
    pub fn current_route(&self) -> String {
        self.history.current_route()
    }
}

pub fn mount_console(path: &str, session: Rc<dyn SessionStore>) -> MountedConsole {
    let history = Rc::new(MemoryHistory::with_initial_path(path));
    let dom = VirtualDom::new(Console)
        .with_root_context(test_services(session))
        .with_root_context(history.clone() as Rc<dyn History>);
    let html = render_settled(dom);
    MountedConsole { html, history }
}
