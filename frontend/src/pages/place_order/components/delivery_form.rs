use crate::pages::place_order::utils::OrderFormState;
use leptos::*;

#[component]
fn Field(
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <input
            type=kind
            name=name
            placeholder=label
            aria-label=label
            required
            class="block w-full border rounded px-2 py-1"
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn DeliveryForm(form: OrderFormState) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <p class="text-lg font-medium text-fg">"Delivery Information"</p>
            <Field name="firstName" label="Name" value=form.first_name_signal() />
            <Field name="email" label="Email address" kind="email" value=form.email_signal() />
            <Field name="street" label="Street" value=form.street_signal() />
            <Field name="phone" label="Phone" kind="tel" value=form.phone_signal() />
        </div>
    }
}
