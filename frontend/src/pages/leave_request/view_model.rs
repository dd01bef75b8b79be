use super::{
    repository::LeaveRequestRepository,
    utils::{LeaveFormState, SUBMIT_FAILURE, SUBMIT_SUCCESS},
};
use crate::api::{ApiClient, ApiError};
use crate::components::notice::MessageState;
use crate::state::session::use_session;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct LeaveRequestViewModel {
    pub form: LeaveFormState,
    pub message: RwSignal<MessageState>,
    pub submit_action: Action<(), Result<(), ApiError>>,
    pub can_submit: Signal<bool>,
}

pub fn use_leave_request_view_model() -> LeaveRequestViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = LeaveRequestRepository::new_with_client(Rc::new(api));
    let requester = use_session().requester;

    let form = LeaveFormState::default();
    let message = create_rw_signal(MessageState::default());

    let submit_action = create_action(move |_: &()| {
        let repo = repository.clone();
        let requester = requester.clone();
        async move { submit_leave_request(&repo, form, requester.as_deref(), message).await }
    });
    let pending = submit_action.pending();
    let can_submit = Signal::derive(move || form.is_valid() && !pending.get());

    LeaveRequestViewModel {
        form,
        message,
        submit_action,
        can_submit,
    }
}

/// Validates, sends one request, and applies the outcome to the form.
/// Validation failures never reach the network; on any failure the entered
/// values stay for a retry.
pub async fn submit_leave_request(
    repo: &LeaveRequestRepository,
    form: LeaveFormState,
    requester: Option<&str>,
    message: RwSignal<MessageState>,
) -> Result<(), ApiError> {
    let payload = match form.to_payload(requester) {
        Ok(payload) => payload,
        Err(err) => {
            message.update(|msg| msg.set_error(err.clone()));
            return Err(err);
        }
    };
    message.update(|msg| msg.clear());
    let result = repo.submit(&payload).await;
    apply_submit_result(&result, form, message);
    result
}

fn apply_submit_result(
    result: &Result<(), ApiError>,
    form: LeaveFormState,
    message: RwSignal<MessageState>,
) {
    match result {
        Ok(()) => {
            form.reset();
            message.update(|msg| msg.set_success(SUBMIT_SUCCESS));
        }
        Err(err) => {
            log::error!("leave request submission failed: {}", err);
            let notice = ApiError {
                error: SUBMIT_FAILURE.to_string(),
                ..err.clone()
            };
            message.update(|msg| msg.set_error(notice));
        }
    }
}
