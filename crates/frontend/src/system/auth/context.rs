use contracts::system::auth::{LoginResponse, Principal, Session, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage::BrowserStorage};

/// Session handle provided through context.
///
/// Storage stays the source of truth: `principal()` re-reads it on every
/// check, and `changed` re-runs dependents after login/logout.
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: StoredValue<Session<BrowserStorage>>,
    changed: Trigger,
    pub user_info: RwSignal<Option<UserInfo>>,
}

impl SessionContext {
    pub fn init() -> Self {
        Self {
            session: StoredValue::new(Session::init(BrowserStorage)),
            changed: Trigger::new(),
            user_info: RwSignal::new(None),
        }
    }

    /// Reactive: tracks login/logout.
    pub fn principal(&self) -> Option<Principal> {
        self.changed.track();
        self.session.with_value(|s| s.principal())
    }

    pub fn access_token(&self) -> Option<String> {
        self.session.with_value(|s| s.access_token())
    }

    pub fn login(&self, response: &LoginResponse) {
        self.session
            .with_value(|s| s.login(&response.access_token, response.user.role));
        self.user_info.set(Some(response.user.clone()));
        log::info!(
            "Logged in as '{}' ({})",
            response.user.username,
            response.user.role
        );
        self.changed.notify();
    }

    pub fn logout(&self) {
        self.session.with_value(|s| s.logout());
        self.user_info.set(None);
        log::info!("Session closed");
        self.changed.notify();
    }

    /// Checks a restored token against the backend once on startup and
    /// tears the session down if it is rejected or the role changed.
    pub fn validate_restored(&self) {
        let Some(token) = self.access_token() else {
            return;
        };
        let stored_role = self.session.with_value(|s| s.principal()).map(|p| p.role);
        let this = *self;

        spawn_local(async move {
            match api::get_current_user(&token).await {
                Ok(user) if Some(user.role) == stored_role => {
                    this.user_info.set(Some(user));
                }
                Ok(user) => {
                    log::warn!(
                        "Stored role {:?} does not match server role {}, logging out",
                        stored_role,
                        user.role
                    );
                    this.logout();
                }
                Err(e) => {
                    log::warn!("Restored session rejected: {}", e);
                    this.logout();
                }
            }
        });
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = SessionContext::init();
    provide_context(session);
    session.validate_restored();

    children()
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}
