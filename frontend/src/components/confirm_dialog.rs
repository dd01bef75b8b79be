use leptos::*;

const CONFIRM_DEFAULT: &str = "Yes";
const CANCEL_DEFAULT: &str = "No";

fn label_or(text: Option<String>, fallback: &str) -> String {
    text.filter(|label| !label.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn confirm_class(destructive: bool) -> &'static str {
    if destructive {
        "px-4 py-2 rounded text-sm font-semibold bg-action-danger-bg text-action-danger-text"
    } else {
        "px-4 py-2 rounded text-sm font-semibold bg-action-primary-bg text-action-primary-text"
    }
}

fn dismisses(key: &str, open: bool) -> bool {
    open && key == "Escape"
}

/// Modal yes/no prompt. Backdrop clicks and Escape count as "no". Escape is
/// read on the window, so it works without the dialog holding focus.
#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: Option<String>,
    #[prop(optional, into)] cancel_label: Option<String>,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_text = label_or(confirm_label, CONFIRM_DEFAULT);
    let cancel_text = label_or(cancel_label, CANCEL_DEFAULT);
    let escape = window_event_listener(ev::keydown, move |ev| {
        if dismisses(&ev.key(), is_open.get_untracked()) {
            ev.prevent_default();
            on_cancel.call(());
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center">
                <div
                    class="absolute inset-0 bg-overlay-backdrop"
                    aria-hidden="true"
                    on:click=move |_| on_cancel.call(())
                ></div>
                <div
                    class="relative max-w-sm w-full rounded-lg bg-surface-elevated border border-border shadow-xl p-5"
                    role="dialog"
                    aria-modal="true"
                >
                    <p class="text-sm text-fg mb-4">{title.clone()}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="px-4 py-2 rounded text-sm bg-surface-muted text-fg"
                            on:click=move |_| on_cancel.call(())
                        >
                            {cancel_text.clone()}
                        </button>
                        <button
                            type="button"
                            class=confirm_class(destructive)
                            disabled=move || confirm_disabled.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            {confirm_text.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
