use crate::components::{
    empty_state::EmptyState,
    layout::{Layout, Section},
};
use crate::pages::place_order::utils::format_amount;
use crate::state::cart::{use_cart, CartState};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = use_cart();
    let lines = Signal::derive(move || cart.with(CartState::order_items));
    let subtotal = Signal::derive(move || cart.with(CartState::subtotal));

    view! {
        <Title text="Cart" />
        <Layout section=Section::Storefront>
            <Show
                when=move || !lines.with(Vec::is_empty)
                fallback=|| {
                    view! {
                        <EmptyState
                            title="Your cart is empty"
                            description="Add dishes from the menu to place an order."
                        />
                    }
                }
            >
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Item"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Price"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Quantity"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Total"</th>
                        </tr>
                    </thead>
                    <tbody class="bg-surface-elevated divide-y divide-border">
                        {move || {
                            lines
                                .get()
                                .into_iter()
                                .map(|line| {
                                    let line_total = line.item.price * f64::from(line.quantity);
                                    view! {
                                        <tr>
                                            <td class="px-4 py-2 text-sm text-fg">{line.item.name}</td>
                                            <td class="px-4 py-2 text-sm text-fg">{format_amount(line.item.price)}</td>
                                            <td class="px-4 py-2 text-sm text-fg">{line.quantity}</td>
                                            <td class="px-4 py-2 text-sm text-fg">{format_amount(line_total)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <div class="mt-6 flex justify-between items-center">
                    <p class="text-sm text-fg">
                        "Subtotal: " {move || format_amount(subtotal.get())}
                    </p>
                    <a
                        href="/order"
                        class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text"
                    >
                        "PROCEED TO CHECKOUT"
                    </a>
                </div>
            </Show>
        </Layout>
    }
}
