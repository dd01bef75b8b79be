use crate::pages::place_order::utils::{format_amount, OrderTotals};
use leptos::*;

#[component]
pub fn OrderSummary(
    totals: Signal<OrderTotals>,
    #[prop(into)] busy: MaybeSignal<bool>,
) -> impl IntoView {
    let busy = Signal::derive(move || busy.get());
    let row = |label: &'static str, amount: Signal<f64>| {
        view! {
            <div class="flex justify-between text-sm">
                <p>{label}</p>
                <p>{move || format_amount(amount.get())}</p>
            </div>
        }
    };

    view! {
        <div class="space-y-2">
            <h2 class="text-lg font-medium text-fg">"Cart Totals"</h2>
            {row("Subtotal", Signal::derive(move || totals.get().subtotal))}
            <hr />
            {row("Delivery Fee", Signal::derive(move || totals.get().delivery_fee))}
            <hr />
            <div class="flex justify-between font-semibold">
                <b>"Total"</b>
                <b>{move || format_amount(totals.get().total)}</b>
            </div>
            <button
                type="submit"
                class="w-full px-4 py-2 rounded bg-action-primary-bg text-action-primary-text"
                disabled=move || !totals.get().is_payable()
                aria-busy=move || busy.get().to_string()
            >
                {move || if busy.get() { "PROCESSING..." } else { "PROCEED TO PAYMENT" }}
            </button>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn shows_fee_and_total_for_filled_cart() {
        let html = render_to_string(|| {
            let totals = Signal::derive(|| OrderTotals::from_subtotal(28.5));
            view! { <OrderSummary totals=totals busy=false /> }
        });
        assert!(html.contains("$28.50"));
        assert!(html.contains("$2.00"));
        assert!(html.contains("$30.50"));
        assert!(html.contains("PROCEED TO PAYMENT"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn disables_payment_for_zero_total() {
        let html = render_to_string(|| {
            let totals = Signal::derive(|| OrderTotals::from_subtotal(0.0));
            view! { <OrderSummary totals=totals busy=false /> }
        });
        assert!(html.contains("$0.00"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn busy_summary_keeps_payment_enabled_and_shows_progress() {
        let html = render_to_string(|| {
            let totals = Signal::derive(|| OrderTotals::from_subtotal(28.5));
            view! { <OrderSummary totals=totals busy=Signal::derive(|| true) /> }
        });
        assert!(html.contains("PROCESSING..."));
        assert!(!html.contains("disabled"));
    }
}
