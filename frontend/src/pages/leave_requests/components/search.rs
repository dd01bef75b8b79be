use leptos::*;

/// Search box that fires on Enter or the button, never while typing.
/// `draft` is owned by the dashboard so a refresh can empty the box.
#[component]
pub fn LeaveSearch(draft: RwSignal<String>, on_search: Callback<String>) -> impl IntoView {
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_search.call(draft.get_untracked());
    };

    view! {
        <form class="flex gap-2 mb-4 w-full max-w-sm" role="search" on:submit=on_submit>
            <input
                type="search"
                class="flex-1 border rounded px-2 py-1"
                placeholder="Search by employee or reason"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            />
            <button type="submit" class="px-3 py-1 rounded bg-action-primary-bg text-action-primary-text">
                "Search"
            </button>
        </form>
    }
}
