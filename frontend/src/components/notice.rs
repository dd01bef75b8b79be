use crate::api::ApiError;
use crate::components::layout::{ErrorMessage, SuccessMessage};
use leptos::*;

const SUCCESS_VISIBLE_MS: u32 = 3_000;

/// Outcome of the last user action on a page. Setting one side clears the
/// other.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: ApiError) {
        self.error = Some(msg);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

/// Toast-like banner for a `MessageState`. Success messages dismiss
/// themselves; errors stay until the next action.
#[component]
pub fn Notice(message: RwSignal<MessageState>) -> impl IntoView {
    create_effect(move |_| {
        let Some(shown) = message.get().success else {
            return;
        };
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SUCCESS_VISIBLE_MS).await;
            message.update(|msg| {
                if msg.success.as_deref() == Some(shown.as_str()) {
                    msg.success = None;
                }
            });
        });
    });

    view! {
        {move || message.get().error.map(|err| view! { <ErrorMessage message=err.error /> })}
        {move || message.get().success.map(|msg| view! { <SuccessMessage message=msg /> })}
    }
}
