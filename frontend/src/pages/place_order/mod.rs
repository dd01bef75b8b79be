use leptos::*;

pub mod components;
mod panel;
mod repository;
pub(crate) mod utils;
mod view_model;

pub use panel::PlaceOrderPanel;

#[component]
pub fn PlaceOrderPage() -> impl IntoView {
    view! { <PlaceOrderPanel /> }
}
