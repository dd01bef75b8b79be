use super::{
    repository::LeaveRequestsRepository,
    utils::{
        DashboardState, DELETE_FAILURE, DELETE_SUCCESS, FETCH_FAILURE, STATUS_FAILURE,
        STATUS_SUCCESS,
    },
};
use crate::api::{ApiClient, ApiError, LeaveStatus};
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct StatusChange {
    pub id: String,
    pub status: LeaveStatus,
}

#[derive(Clone, Copy)]
pub struct LeaveRequestsViewModel {
    pub state: DashboardState,
    pub status_action: Action<StatusChange, Result<(), ApiError>>,
    pub delete_action: Action<(), Result<(), ApiError>>,
}

pub fn use_leave_requests_view_model() -> LeaveRequestsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(LeaveRequestsRepository::new_with_client(Rc::new(api)));
    let state = DashboardState::default();

    let load_action = create_action(move |_: &()| {
        let repo = repository.get_value();
        async move { refresh_leave_requests(&repo, state).await }
    });
    let status_action = create_action(move |change: &StatusChange| {
        let repo = repository.get_value();
        let change = change.clone();
        async move { change_status(&repo, state, &change.id, change.status).await }
    });
    let delete_action = create_action(move |_: &()| {
        let repo = repository.get_value();
        async move { confirm_delete(&repo, state).await }
    });

    create_effect(move |_| untrack(|| load_action.dispatch(())));

    LeaveRequestsViewModel {
        state,
        status_action,
        delete_action,
    }
}

/// Replaces the held list with the server's. A refresh also clears the
/// search so the table shows exactly what was fetched.
pub async fn refresh_leave_requests(
    repo: &LeaveRequestsRepository,
    state: DashboardState,
) -> Result<(), ApiError> {
    state.loading.set(true);
    let result = repo.list().await;
    state.loading.set(false);
    match result {
        Ok(items) => {
            state.fetched.set(items);
            state.clear_search();
            Ok(())
        }
        Err(err) => {
            log::error!("listing leave requests failed: {}", err);
            state
                .message
                .update(|msg| msg.set_error(with_notice(&err, FETCH_FAILURE)));
            Err(err)
        }
    }
}

/// Writes the new status, then re-reads the list; the table only ever shows
/// confirmed state.
pub async fn change_status(
    repo: &LeaveRequestsRepository,
    state: DashboardState,
    id: &str,
    status: LeaveStatus,
) -> Result<(), ApiError> {
    match repo.update_status(id, status).await {
        Ok(()) => {
            state.message.update(|msg| msg.set_success(STATUS_SUCCESS));
            // A failed re-read reports its own error; the write itself stood.
            let _ = refresh_leave_requests(repo, state).await;
            Ok(())
        }
        Err(err) => {
            log::error!("updating leave request {} failed: {}", id, err);
            state
                .message
                .update(|msg| msg.set_error(with_notice(&err, STATUS_FAILURE)));
            // Re-render rows so the selector drops the unconfirmed choice.
            state.fetched.update(|_| {});
            Err(err)
        }
    }
}

pub fn request_delete(state: DashboardState, id: &str) {
    state.pending_delete.set(Some(id.to_string()));
}

pub fn cancel_delete(state: DashboardState) {
    state.pending_delete.set(None);
}

/// Deletes the record awaiting confirmation, if any, then re-reads the list.
pub async fn confirm_delete(
    repo: &LeaveRequestsRepository,
    state: DashboardState,
) -> Result<(), ApiError> {
    let Some(id) = state.pending_delete.get_untracked() else {
        return Ok(());
    };
    state.pending_delete.set(None);
    match repo.delete(&id).await {
        Ok(()) => {
            state.message.update(|msg| msg.set_success(DELETE_SUCCESS));
            let _ = refresh_leave_requests(repo, state).await;
            Ok(())
        }
        Err(err) => {
            log::error!("deleting leave request {} failed: {}", id, err);
            state
                .message
                .update(|msg| msg.set_error(with_notice(&err, DELETE_FAILURE)));
            Err(err)
        }
    }
}

fn with_notice(err: &ApiError, notice: &str) -> ApiError {
    ApiError {
        error: notice.to_string(),
        ..err.clone()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::helpers::leave_request_json;
    use serde_json::json;

    fn repo(server: &MockServer) -> LeaveRequestsRepository {
        LeaveRequestsRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    fn mock_list(server: &MockServer, status_of_first: &str) {
        server.mock(|when, then| {
            when.method(GET).path("/api/leave-requests");
            then.status(200).json_body(json!({
                "data": [
                    leave_request_json("lr-1", "alice@example.com", "Dentist", status_of_first),
                    leave_request_json("lr-2", "bob@example.com", "Family visit", "Pending"),
                    leave_request_json("lr-3", "alice.b@example.com", "Exam", "Pending")
                ]
            }));
        });
    }

    #[tokio::test]
    async fn refresh_loads_list_and_search_narrows_display() {
        let server = MockServer::start_async().await;
        mock_list(&server, "Pending");
        let runtime = create_runtime();
        let state = DashboardState::default();

        refresh_leave_requests(&repo(&server), state).await.unwrap();
        assert_eq!(state.displayed().len(), 3);
        assert!(!state.loading.get());

        state.search("ALICE");
        assert_eq!(state.displayed().len(), 2);
        runtime.dispose();
    }

    #[tokio::test]
    async fn refresh_after_write_empties_the_search_box() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/leave-requests/lr-1");
            then.status(200).json_body(json!({ "success": true }));
        });
        mock_list(&server, "Approved");
        let runtime = create_runtime();
        let state = DashboardState::default();
        state.draft.set("alice".into());
        state.search("alice");

        change_status(&repo(&server), state, "lr-1", LeaveStatus::Approved)
            .await
            .unwrap();

        assert!(state.draft.get().is_empty());
        assert!(state.query.get().is_empty());
        assert_eq!(state.displayed().len(), 3);
        runtime.dispose();
    }

    #[tokio::test]
    async fn refresh_failure_reports_and_keeps_previous_rows() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/leave-requests");
            then.status(500).json_body(json!({ "error": "db down" }));
        });
        let runtime = create_runtime();
        let state = DashboardState::default();
        state
            .fetched
            .set(vec![crate::test_support::helpers::leave_request("old", "x@example.com", "r")]);

        assert!(refresh_leave_requests(&repo(&server), state).await.is_err());
        assert_eq!(state.fetched.get().len(), 1);
        assert_eq!(
            state.message.get().error.map(|e| e.error).as_deref(),
            Some(FETCH_FAILURE)
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn status_change_puts_once_then_refetches() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/leave-requests/lr-1");
            then.status(200).json_body(json!({ "success": true }));
        });
        mock_list(&server, "Approved");
        let runtime = create_runtime();
        let state = DashboardState::default();

        change_status(&repo(&server), state, "lr-1", LeaveStatus::Approved)
            .await
            .unwrap();

        let received = server.received();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0].method, PUT);
        assert_eq!(received[0].body, Some(json!({ "status": "Approved" })));
        assert_eq!(received[1].method, GET);
        assert_eq!(received[1].path, "/api/leave-requests");

        let first = state
            .displayed()
            .into_iter()
            .find(|r| r.id == "lr-1")
            .unwrap();
        assert_eq!(first.status, LeaveStatus::Approved);
        assert_eq!(state.message.get().success.as_deref(), Some(STATUS_SUCCESS));
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_status_change_skips_refetch() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/leave-requests/lr-1");
            then.status(400).json_body(json!({ "error": "invalid status" }));
        });
        mock_list(&server, "Pending");
        let runtime = create_runtime();
        let state = DashboardState::default();

        assert!(change_status(&repo(&server), state, "lr-1", LeaveStatus::Rejected)
            .await
            .is_err());
        assert_eq!(server.hits(PUT, "/api/leave-requests/lr-1"), 1);
        assert_eq!(server.hits(GET, "/api/leave-requests"), 0);
        assert_eq!(
            state.message.get().error.map(|e| e.error).as_deref(),
            Some(STATUS_FAILURE)
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn confirmed_delete_issues_one_delete_and_refreshes() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/api/leave-requests/lr-2");
            then.status(200).json_body(json!({ "success": true }));
        });
        mock_list(&server, "Pending");
        let runtime = create_runtime();
        let state = DashboardState::default();

        request_delete(state, "lr-2");
        confirm_delete(&repo(&server), state).await.unwrap();

        assert_eq!(server.hits(DELETE, "/api/leave-requests/lr-2"), 1);
        assert_eq!(server.hits(GET, "/api/leave-requests"), 1);
        assert!(state.pending_delete.get().is_none());
        assert_eq!(state.message.get().success.as_deref(), Some(DELETE_SUCCESS));
        runtime.dispose();
    }

    #[tokio::test]
    async fn cancelled_delete_makes_no_call() {
        let server = MockServer::start_async().await;
        let runtime = create_runtime();
        let state = DashboardState::default();

        request_delete(state, "lr-2");
        cancel_delete(state);
        confirm_delete(&repo(&server), state).await.unwrap();

        assert_eq!(server.total_hits(), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_delete_reports_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/api/leave-requests/lr-2");
            then.status(404).json_body(json!({ "message": "not found" }));
        });
        let runtime = create_runtime();
        let state = DashboardState::default();

        request_delete(state, "lr-2");
        assert!(confirm_delete(&repo(&server), state).await.is_err());
        assert_eq!(server.hits(GET, "/api/leave-requests"), 0);
        assert_eq!(
            state.message.get().error.map(|e| e.error).as_deref(),
            Some(DELETE_FAILURE)
        );
        runtime.dispose();
    }
}
