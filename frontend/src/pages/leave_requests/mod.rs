use leptos::*;

pub mod components;
mod panel;
mod repository;
mod utils;
mod view_model;

pub use panel::LeaveRequestsPanel;

#[component]
pub fn LeaveRequestsPage() -> impl IntoView {
    view! { <LeaveRequestsPanel /> }
}
