use crate::{
    abstract_trait::navigator::DynNavigator,
    gateway::{SessionContext, SessionState},
    guard::{Audience, LOGIN_PATH, Layout, RouteTable},
};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The session is still being restored; show the loader.
    Placeholder,
    Render { layout: Layout },
    Redirect { to: String, replace: bool },
    NotFound,
}

#[derive(Debug, Clone)]
pub struct RouteGuard {
    table: RouteTable,
    session: Arc<SessionContext>,
    navigator: DynNavigator,
}

impl RouteGuard {
    pub fn new(table: RouteTable, session: Arc<SessionContext>, navigator: DynNavigator) -> Self {
        Self {
            table,
            session,
            navigator,
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Decides what `path` should show for the given session. Pure.
    pub fn evaluate(&self, path: &str, state: &SessionState) -> GuardOutcome {
        let Some(entry) = self.table.find(path) else {
            return GuardOutcome::NotFound;
        };

        match entry.audience {
            Audience::Public => GuardOutcome::Render {
                layout: Layout::Blank,
            },
            Audience::PublicOnly if state.is_authenticated => GuardOutcome::Redirect {
                to: self.landing_for(state),
                replace: true,
            },
            Audience::PublicOnly => GuardOutcome::Render {
                layout: Layout::Blank,
            },
            Audience::Authenticated | Audience::Roles(_) => {
                if state.auth_loading {
                    return GuardOutcome::Placeholder;
                }
                if !state.is_authenticated {
                    return GuardOutcome::Redirect {
                        to: LOGIN_PATH.to_string(),
                        replace: true,
                    };
                }
                let Some(role) = state.role else {
                    return GuardOutcome::Placeholder;
                };
                if entry.redirect_to_landing {
                    return GuardOutcome::Redirect {
                        to: self.table.landing(role).to_string(),
                        replace: false,
                    };
                }
                if !entry.audience.admits(Some(role)) {
                    return GuardOutcome::Redirect {
                        to: self.table.landing(role).to_string(),
                        replace: true,
                    };
                }
                GuardOutcome::Render {
                    layout: entry.layout(Some(role)),
                }
            }
        }
    }

    fn landing_for(&self, state: &SessionState) -> String {
        state
            .role
            .map(|role| self.table.landing(role))
            .unwrap_or("/")
            .to_string()
    }

    /// Evaluates against the live session and performs any redirect.
    pub fn enforce(&self, path: &str) -> GuardOutcome {
        let outcome = self.evaluate(path, &self.session.snapshot());

        if let GuardOutcome::Redirect { to, replace } = &outcome {
            debug!("guard redirects {path} -> {to}");
            if *replace {
                self.navigator.replace(to);
            } else {
                self.navigator.push(to);
            }
        }

        outcome
    }
}
