use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    pages::{CartPage, HomePage, LeaveRequestPage, LeaveRequestsPage, PlaceOrderPage},
    state::{
        cart::{CartProvider, CartState},
        session::{Session, SessionProvider},
    },
};

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    let api = crate::config::known_api_base_url()
        .map(crate::api::ApiClient::new_with_base_url)
        .unwrap_or_default();
    provide_context(api);
    let session = Session::from_storage();
    let cart = CartState::from_storage();
    log::info!(
        "session {}; {} cart line(s)",
        if session.is_authenticated() { "present" } else { "absent" },
        cart.order_items().len()
    );
    view! {
        <SessionProvider session=session>
            <CartProvider cart=cart>
                <Router>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/cart" view=CartPage/>
                        <Route path="/order" view=PlaceOrderPage/>
                        <Route path="/leave" view=LeaveRequestPage/>
                        <Route path="/admin/leave-requests" view=LeaveRequestsPage/>
                    </Routes>
                </Router>
            </CartProvider>
        </SessionProvider>
    }
}
