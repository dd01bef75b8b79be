use crate::api::{FoodItem, OrderItem};
use crate::utils::storage as storage_utils;
use leptos::*;
use std::collections::BTreeMap;

const CATALOG_KEY: &str = "food_list";
const QUANTITIES_KEY: &str = "cartItems";

/// Snapshot of the storefront cart. The storefront owns it; checkout only
/// reads it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    pub catalog: Vec<FoodItem>,
    pub quantities: BTreeMap<String, u32>,
}

impl CartState {
    pub fn new(catalog: Vec<FoodItem>, quantities: BTreeMap<String, u32>) -> Self {
        Self {
            catalog,
            quantities,
        }
    }

    pub fn from_storage() -> Self {
        match storage_utils::local_storage() {
            Ok(storage) => Self::new(
                storage_utils::read_json(&storage, CATALOG_KEY).unwrap_or_default(),
                storage_utils::read_json(&storage, QUANTITIES_KEY).unwrap_or_default(),
            ),
            Err(err) => {
                log::warn!("cart unavailable: {}", err);
                Self::default()
            }
        }
    }

    pub fn quantity(&self, id: &str) -> u32 {
        self.quantities.get(id).copied().unwrap_or(0)
    }

    /// Items with a positive quantity, in catalog order. Quantities for ids
    /// missing from the catalog are ignored.
    pub fn order_items(&self) -> Vec<OrderItem> {
        self.catalog
            .iter()
            .filter_map(|item| {
                let quantity = self.quantity(&item.id);
                (quantity > 0).then(|| OrderItem {
                    item: item.clone(),
                    quantity,
                })
            })
            .collect()
    }

    pub fn subtotal(&self) -> f64 {
        self.order_items()
            .iter()
            .map(|line| line.item.price * f64::from(line.quantity))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.subtotal() <= 0.0
    }
}

#[component]
pub fn CartProvider(cart: CartState, children: Children) -> impl IntoView {
    provide_context(create_rw_signal(cart));
    view! { <>{children()}</> }
}

pub fn use_cart() -> RwSignal<CartState> {
    match use_context::<RwSignal<CartState>>() {
        Some(cart) => cart,
        None => {
            let cart = create_rw_signal(CartState::default());
            provide_context(cart);
            cart
        }
    }
}
