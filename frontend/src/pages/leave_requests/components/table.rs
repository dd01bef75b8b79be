use crate::api::{LeaveRequest, LeaveStatus};
use crate::utils::time::format_date;
use leptos::*;

#[component]
pub fn LeaveRequestsTable(
    rows: Signal<Vec<LeaveRequest>>,
    on_status_change: Callback<(String, LeaveStatus)>,
    on_delete: Callback<String>,
    #[prop(into)] status_locked: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Requested By"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"From"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"To"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Reason"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Action"</th>
                    </tr>
                </thead>
                <tbody class="bg-surface-elevated divide-y divide-border">
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|row| leave_row(row, on_status_change, on_delete, status_locked))
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn leave_row(
    row: LeaveRequest,
    on_status_change: Callback<(String, LeaveStatus)>,
    on_delete: Callback<String>,
    status_locked: Signal<bool>,
) -> impl IntoView {
    let id_for_status = row.id.clone();
    let id_for_delete = row.id.clone();
    let confirmed = row.status;
    view! {
        <tr>
            <td class="px-4 py-2 text-sm text-fg">{row.requested_by}</td>
            <td class="px-4 py-2 text-sm text-fg">{format_date(&row.date_from)}</td>
            <td class="px-4 py-2 text-sm text-fg">{format_date(&row.date_to)}</td>
            <td class="px-4 py-2 text-sm text-fg">{row.reason}</td>
            <td class="px-4 py-2 text-sm">
                <select
                    class="border rounded px-2 py-1 w-32"
                    prop:value=confirmed.as_str()
                    disabled=move || status_locked.get()
                    on:change=move |ev| {
                        match event_target_value(&ev).parse::<LeaveStatus>() {
                            Ok(status) if status != confirmed => {
                                on_status_change.call((id_for_status.clone(), status))
                            }
                            Ok(_) => {}
                            Err(err) => log::warn!("ignoring status choice: {}", err),
                        }
                    }
                >
                    {LeaveStatus::ALL
                        .into_iter()
                        .map(|status| {
                            view! {
                                <option value=status.as_str() selected=status == confirmed>
                                    {status.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </td>
            <td class="px-4 py-2 text-sm">
                <button
                    type="button"
                    class="px-3 py-1 rounded bg-action-danger-bg text-action-danger-text"
                    on:click=move |_| on_delete.call(id_for_delete.clone())
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
