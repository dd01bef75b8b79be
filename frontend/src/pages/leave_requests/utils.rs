use crate::api::LeaveRequest;
use crate::components::notice::MessageState;
use leptos::*;

pub const FETCH_FAILURE: &str = "Failed to fetch leave requests";
pub const STATUS_SUCCESS: &str = "Status updated successfully";
pub const STATUS_FAILURE: &str = "Failed to update status";
pub const DELETE_SUCCESS: &str = "Leave request deleted successfully";
pub const DELETE_FAILURE: &str = "Failed to delete leave request";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this leave request?";

/// Client-side view of the dashboard. `fetched` is only ever replaced by a
/// successful list call; searching narrows what is displayed without
/// touching it. `draft` is the text in the search box, `query` the last
/// submitted search.
#[derive(Clone, Copy)]
pub struct DashboardState {
    pub fetched: RwSignal<Vec<LeaveRequest>>,
    pub query: RwSignal<String>,
    pub draft: RwSignal<String>,
    pub loading: RwSignal<bool>,
    pub message: RwSignal<MessageState>,
    pub pending_delete: RwSignal<Option<String>>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            fetched: create_rw_signal(Vec::new()),
            query: create_rw_signal(String::new()),
            draft: create_rw_signal(String::new()),
            loading: create_rw_signal(false),
            message: create_rw_signal(MessageState::default()),
            pending_delete: create_rw_signal(None),
        }
    }
}

impl DashboardState {
    pub fn displayed(&self) -> Vec<LeaveRequest> {
        self.fetched
            .with(|items| filter_requests(items, &self.query.get()))
    }

    pub fn search(&self, query: &str) {
        self.query.set(query.trim().to_string());
    }

    pub fn clear_search(&self) {
        self.query.set(String::new());
        self.draft.set(String::new());
    }
}

pub fn filter_requests(items: &[LeaveRequest], query: &str) -> Vec<LeaveRequest> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| {
            item.requested_by.to_lowercase().contains(&needle)
                || item.reason.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
