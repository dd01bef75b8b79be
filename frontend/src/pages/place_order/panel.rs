use super::{
    components::{delivery_form::DeliveryForm, summary::OrderSummary},
    utils::CheckoutPhase,
    view_model::use_checkout_view_model,
};
use crate::components::{
    layout::{Layout, LoadingSpinner, Section},
    notice::Notice,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn PlaceOrderPanel() -> impl IntoView {
    let vm = use_checkout_view_model();
    let state = vm.state;
    let submit_action = vm.submit_action;
    let phase = state.phase;
    let busy = Signal::derive(move || {
        matches!(
            phase.get(),
            CheckoutPhase::Submitting | CheckoutPhase::Redirecting
        )
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        submit_action.dispatch(());
    };

    view! {
        <Title text="Place Order" />
        <Layout section=Section::Storefront>
            {move || match phase.get() {
                CheckoutPhase::Redirected => ().into_view(),
                CheckoutPhase::LoadingProfile => {
                    view! { <LoadingSpinner label="Loading user data..." /> }
                        .into_view()
                }
                _ => {
                    view! {
                        <form
                            class="grid grid-cols-1 gap-8 md:grid-cols-2"
                            on:submit=on_submit
                        >
                            <div class="space-y-4">
                                <Notice message=state.message />
                                <DeliveryForm form=state.form />
                            </div>
                            <OrderSummary totals=vm.totals busy=busy />
                        </form>
                    }
                        .into_view()
                }
            }}
        </Layout>
    }
}
