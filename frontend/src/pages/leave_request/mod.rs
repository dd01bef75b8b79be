use leptos::*;

mod panel;
mod repository;
mod utils;
mod view_model;

pub use panel::LeaveRequestPanel;

#[component]
pub fn LeaveRequestPage() -> impl IntoView {
    view! { <LeaveRequestPanel /> }
}
