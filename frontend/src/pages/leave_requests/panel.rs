use super::{
    components::{search::LeaveSearch, table::LeaveRequestsTable},
    utils::DELETE_PROMPT,
    view_model::{cancel_delete, request_delete, use_leave_requests_view_model, StatusChange},
};
use crate::api::LeaveStatus;
use crate::components::{
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    layout::{Layout, LoadingSpinner, Section},
    notice::Notice,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn LeaveRequestsPanel() -> impl IntoView {
    let vm = use_leave_requests_view_model();
    let state = vm.state;
    let status_action = vm.status_action;
    let delete_action = vm.delete_action;

    let rows = Signal::derive(move || state.displayed());
    let status_locked = status_action.pending();

    let on_search = Callback::new(move |query: String| state.search(&query));
    let on_status_change = Callback::new(move |(id, status): (String, LeaveStatus)| {
        status_action.dispatch(StatusChange { id, status });
    });
    let on_delete = Callback::new(move |id: String| request_delete(state, &id));
    let on_confirm_delete = Callback::new(move |_| delete_action.dispatch(()));
    let on_cancel_delete = Callback::new(move |_| cancel_delete(state));
    let delete_open = Signal::derive(move || state.pending_delete.get().is_some());

    view! {
        <Title text="Leave Requests" />
        <Layout section=Section::Admin>
            <div class="space-y-4">
                <h2 class="text-lg font-medium text-fg">"Leave Requests"</h2>
                <Notice message=state.message />
                <LeaveSearch draft=state.draft on_search=on_search />
                <Show
                    when=move || !state.loading.get()
                    fallback=|| view! { <LoadingSpinner /> }
                >
                    <Show
                        when=move || !rows.with(Vec::is_empty)
                        fallback=|| {
                            view! {
                                <EmptyState
                                    title="No leave requests"
                                    description="Nothing matches the current list or search."
                                />
                            }
                        }
                    >
                        <LeaveRequestsTable
                            rows=rows
                            on_status_change=on_status_change
                            on_delete=on_delete
                            status_locked=status_locked
                        />
                    </Show>
                </Show>
            </div>
            <ConfirmDialog
                is_open=delete_open
                title=DELETE_PROMPT.to_string()
                on_confirm=on_confirm_delete
                on_cancel=on_cancel_delete
                confirm_label="Yes".to_string()
                cancel_label="No".to_string()
                destructive=true
            />
        </Layout>
    }
}
