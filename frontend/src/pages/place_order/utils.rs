use crate::api::{ApiError, OrderAddress, PlaceOrderRequest};
use crate::state::{cart::CartState, session::Session};
use leptos::*;

pub const DELIVERY_FEE: f64 = 2.0;
pub const CART_PATH: &str = "/cart";
pub const PROFILE_FAILURE: &str = "Error fetching user data";
pub const ORDER_FAILURE: &str = "Failed to place order. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
}

impl OrderTotals {
    pub fn from_subtotal(subtotal: f64) -> Self {
        let subtotal = subtotal.max(0.0);
        let delivery_fee = if subtotal > 0.0 { DELIVERY_FEE } else { 0.0 };
        Self {
            subtotal,
            delivery_fee,
            total: subtotal + delivery_fee,
        }
    }

    pub fn is_payable(&self) -> bool {
        self.total > 0.0
    }
}

pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// `LoadingProfile → Ready → Submitting → Redirecting`, falling back to
/// `Ready` when submission fails. `Redirected` means the entry guard sent
/// the visitor away and nothing else happens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckoutPhase {
    #[default]
    LoadingProfile,
    Ready,
    Submitting,
    Redirecting,
    Redirected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Redirect {
    /// In-app route, e.g. back to the cart.
    Internal(String),
    /// Payment provider page; replaces the current history entry.
    External(String),
}

/// Where to send the visitor instead of showing checkout, if anywhere.
pub fn entry_redirect(session: &Session, cart: &CartState) -> Option<&'static str> {
    if !session.is_authenticated() || cart.is_empty() {
        Some(CART_PATH)
    } else {
        None
    }
}

#[derive(Clone, Copy)]
pub struct OrderFormState {
    first_name: RwSignal<String>,
    email: RwSignal<String>,
    street: RwSignal<String>,
    phone: RwSignal<String>,
}

impl Default for OrderFormState {
    fn default() -> Self {
        Self {
            first_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            street: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
        }
    }
}

impl OrderFormState {
    pub fn first_name_signal(&self) -> RwSignal<String> {
        self.first_name
    }

    pub fn email_signal(&self) -> RwSignal<String> {
        self.email
    }

    pub fn street_signal(&self) -> RwSignal<String> {
        self.street
    }

    pub fn phone_signal(&self) -> RwSignal<String> {
        self.phone
    }

    pub fn load(&self, address: OrderAddress) {
        self.first_name.set(address.first_name);
        self.email.set(address.email);
        self.street.set(address.street);
        self.phone.set(address.phone);
    }

    pub fn snapshot(&self) -> OrderAddress {
        OrderAddress {
            first_name: self.first_name.get_untracked().trim().to_string(),
            email: self.email.get_untracked().trim().to_string(),
            street: self.street.get_untracked().trim().to_string(),
            phone: self.phone.get_untracked().trim().to_string(),
        }
    }

    pub fn to_address(self) -> Result<OrderAddress, ApiError> {
        let address = self.snapshot();
        let required = [
            (&address.first_name, "Name is required"),
            (&address.email, "Email address is required"),
            (&address.street, "Street address is required"),
            (&address.phone, "Phone number is required"),
        ];
        if let Some((_, msg)) = required.iter().find(|(value, _)| value.is_empty()) {
            return Err(ApiError::validation(*msg));
        }
        if !address.email.contains('@') {
            return Err(ApiError::validation("Enter a valid email address"));
        }
        if address.phone.len() != 10 || !address.phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ApiError::validation("Phone number must be 10 digits"));
        }
        Ok(address)
    }
}

pub fn build_order(address: OrderAddress, cart: &CartState) -> PlaceOrderRequest {
    PlaceOrderRequest {
        address,
        items: cart.order_items(),
        amount: OrderTotals::from_subtotal(cart.subtotal()).total,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{sample_cart, signed_in};
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn delivery_fee_applies_only_to_positive_subtotals() {
        let totals = OrderTotals::from_subtotal(28.5);
        assert_eq!(totals.delivery_fee, 2.0);
        assert_eq!(totals.total, 30.5);
        assert!(totals.is_payable());

        let empty = OrderTotals::from_subtotal(0.0);
        assert_eq!(empty.delivery_fee, 0.0);
        assert_eq!(empty.total, 0.0);
        assert!(!empty.is_payable());
    }

    #[test]
    fn amounts_render_with_two_decimals() {
        assert_eq!(format_amount(30.5), "$30.50");
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(2.0), "$2.00");
    }

    #[test]
    fn entry_requires_token_and_non_empty_cart() {
        assert_eq!(entry_redirect(&signed_in(), &sample_cart()), None);
        assert_eq!(
            entry_redirect(&Session::default(), &sample_cart()),
            Some(CART_PATH)
        );
        assert_eq!(
            entry_redirect(&signed_in(), &CartState::default()),
            Some(CART_PATH)
        );
    }

    #[test]
    fn to_address_validates_required_email_and_phone() {
        with_runtime(|| {
            let form = OrderFormState::default();
            form.load(OrderAddress {
                first_name: "Dana".into(),
                email: "dana@example.com".into(),
                street: " 1 Main St ".into(),
                phone: "0123456789".into(),
            });
            assert_eq!(form.to_address().unwrap().street, "1 Main St");

            form.phone_signal().set("12345".into());
            assert_eq!(
                form.to_address().unwrap_err().error,
                "Phone number must be 10 digits"
            );
            form.phone_signal().set("01234567ab".into());
            assert!(form.to_address().is_err());

            form.phone_signal().set("0123456789".into());
            form.email_signal().set("dana.example.com".into());
            assert_eq!(
                form.to_address().unwrap_err().error,
                "Enter a valid email address"
            );

            form.first_name_signal().set("  ".into());
            assert_eq!(form.to_address().unwrap_err().error, "Name is required");
        });
    }

    #[test]
    fn build_order_uses_cart_lines_and_total_with_fee() {
        let order = build_order(OrderAddress::default(), &sample_cart());
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.amount, 30.5);
    }
}
