use crate::utils::storage as storage_utils;
use leptos::*;

const TOKEN_KEY: &str = "token";
const USER_ID_KEY: &str = "uid";
const REQUESTER_KEY: &str = "deliveryPersonEmail";

/// Credentials and identifiers the host application leaves in browser
/// storage. Pages receive this through context and never read storage
/// themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub requester: Option<String>,
}

impl Session {
    pub fn from_storage() -> Self {
        let storage = match storage_utils::local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("session unavailable: {}", err);
                return Self::default();
            }
        };
        let read = |key: &str| storage_utils::read_item(&storage, key);
        Self {
            token: read(TOKEN_KEY),
            user_id: read(USER_ID_KEY),
            requester: read(REQUESTER_KEY),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[component]
pub fn SessionProvider(session: Session, children: Children) -> impl IntoView {
    provide_context(session);
    view! { <>{children()}</> }
}

pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_default()
}
