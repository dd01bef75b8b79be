use super::view_model::use_leave_request_view_model;
use crate::components::{
    layout::{Layout, Section},
    notice::Notice,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn LeaveRequestPanel() -> impl IntoView {
    let vm = use_leave_request_view_model();
    let form = vm.form;
    let submit_action = vm.submit_action;
    let can_submit = vm.can_submit;
    let pending = submit_action.pending();

    let date_from = form.from_signal();
    let date_to = form.to_signal();
    let reason = form.reason_signal();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        submit_action.dispatch(());
    };

    view! {
        <Title text="Submit Leave Request" />
        <Layout section=Section::Admin>
            <div class="max-w-xl mx-auto bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <h2 class="text-lg font-medium text-fg">"Submit Leave Request"</h2>
                <Notice message=vm.message />
                <form class="space-y-4" on:submit=on_submit>
                    <fieldset>
                        <legend class="block text-sm font-medium text-fg">"Leave Date Range"</legend>
                        <div class="grid grid-cols-1 gap-4 md:grid-cols-2 mt-1">
                            <input
                                type="date"
                                name="dateFrom"
                                aria-label="From"
                                required
                                class="block w-full border rounded px-2 py-1"
                                prop:value=move || date_from.get()
                                on:input=move |ev| date_from.set(event_target_value(&ev))
                            />
                            <input
                                type="date"
                                name="dateTo"
                                aria-label="To"
                                required
                                class="block w-full border rounded px-2 py-1"
                                prop:value=move || date_to.get()
                                on:input=move |ev| date_to.set(event_target_value(&ev))
                            />
                        </div>
                    </fieldset>
                    <div>
                        <label for="leave-reason" class="block text-sm font-medium text-fg">"Reason"</label>
                        <textarea
                            id="leave-reason"
                            name="reason"
                            rows=4
                            required
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || reason.get()
                            on:input=move |ev| reason.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <button
                        type="submit"
                        class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                        disabled=move || !can_submit.get()
                    >
                        {move || if pending.get() { "Submitting..." } else { "Submit Leave Request" }}
                    </button>
                </form>
            </div>
        </Layout>
    }
}
