//! Shared application state for the HTTP layer.

use std::sync::Arc;

use chrono::Duration;

use crate::application::handlers::{
    CreateLabHandler, CreateModuleHandler, CurrentSessionHandler, GetLabHandler, GetModuleHandler,
    GetProgressSummaryHandler, ListLabsHandler, ListModulesHandler, LoginHandler, LogoutHandler,
    MarkLabCompleteHandler, MarkModuleCompleteHandler,
};
use crate::ports::{CatalogStore, ProgressStore, SessionStore, TokenSigner, UserStore};

/// Shared state holding the port implementations.
///
/// Handlers are cheap bundles of `Arc`s, so they are built per request
/// rather than stored.
#[derive(Clone)]
pub struct ApiState {
    pub users: Arc<dyn UserStore>,
    pub catalog: Arc<dyn CatalogStore>,
    pub progress: Arc<dyn ProgressStore>,
    pub sessions: Arc<dyn SessionStore>,
    pub signer: Arc<dyn TokenSigner>,
    pub session_ttl: Duration,
}

impl ApiState {
    pub fn new(
        users: Arc<dyn UserStore>,
        catalog: Arc<dyn CatalogStore>,
        progress: Arc<dyn ProgressStore>,
        sessions: Arc<dyn SessionStore>,
        signer: Arc<dyn TokenSigner>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            users,
            catalog,
            progress,
            sessions,
            signer,
            session_ttl,
        }
    }

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(
            self.users.clone(),
            self.sessions.clone(),
            self.signer.clone(),
            self.catalog.clone(),
            self.progress.clone(),
            self.session_ttl,
        )
    }

    pub fn current_session_handler(&self) -> CurrentSessionHandler {
        CurrentSessionHandler::new(
            self.users.clone(),
            self.sessions.clone(),
            self.signer.clone(),
            self.catalog.clone(),
            self.progress.clone(),
        )
    }

    pub fn logout_handler(&self) -> LogoutHandler {
        LogoutHandler::new(self.sessions.clone(), self.signer.clone())
    }

    pub fn list_modules_handler(&self) -> ListModulesHandler {
        ListModulesHandler::new(self.catalog.clone(), self.progress.clone())
    }

    pub fn list_labs_handler(&self) -> ListLabsHandler {
        ListLabsHandler::new(self.catalog.clone(), self.progress.clone())
    }

    pub fn get_module_handler(&self) -> GetModuleHandler {
        GetModuleHandler::new(self.catalog.clone(), self.progress.clone())
    }

    pub fn get_lab_handler(&self) -> GetLabHandler {
        GetLabHandler::new(self.catalog.clone(), self.progress.clone())
    }

    pub fn create_module_handler(&self) -> CreateModuleHandler {
        CreateModuleHandler::new()
    }

    pub fn create_lab_handler(&self) -> CreateLabHandler {
        CreateLabHandler::new()
    }

    pub fn mark_module_complete_handler(&self) -> MarkModuleCompleteHandler {
        MarkModuleCompleteHandler::new(self.catalog.clone(), self.progress.clone())
    }

    pub fn mark_lab_complete_handler(&self) -> MarkLabCompleteHandler {
        MarkLabCompleteHandler::new(self.catalog.clone(), self.progress.clone())
    }

    pub fn progress_summary_handler(&self) -> GetProgressSummaryHandler {
        GetProgressSummaryHandler::new(
            self.users.clone(),
            self.catalog.clone(),
            self.progress.clone(),
        )
    }
}
