use super::{
    repository::CheckoutRepository,
    utils::{
        build_order, entry_redirect, CheckoutPhase, OrderFormState, OrderTotals, Redirect,
        ORDER_FAILURE, PROFILE_FAILURE,
    },
};
use crate::api::{ApiClient, ApiError, OrderAddress};
use crate::components::notice::MessageState;
use crate::state::{
    cart::{use_cart, CartState},
    session::{use_session, Session},
};
use crate::utils::navigation;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct CheckoutState {
    pub phase: RwSignal<CheckoutPhase>,
    pub form: OrderFormState,
    pub message: RwSignal<MessageState>,
    pub redirect: RwSignal<Option<Redirect>>,
}

impl Default for CheckoutState {
    fn default() -> Self {
        Self {
            phase: create_rw_signal(CheckoutPhase::default()),
            form: OrderFormState::default(),
            message: create_rw_signal(MessageState::default()),
            redirect: create_rw_signal(None),
        }
    }
}

#[derive(Clone, Copy)]
pub struct CheckoutViewModel {
    pub state: CheckoutState,
    pub totals: Signal<OrderTotals>,
    pub submit_action: Action<(), Result<(), ApiError>>,
}

pub fn use_checkout_view_model() -> CheckoutViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(CheckoutRepository::new_with_client(Rc::new(api)));
    let session = store_value(use_session());
    let cart = use_cart();
    let state = CheckoutState::default();
    let totals = Signal::derive(move || OrderTotals::from_subtotal(cart.with(CartState::subtotal)));

    let enter_action = create_action(move |_: &()| {
        let repo = repository.get_value();
        let session = session.get_value();
        let cart = cart.get_untracked();
        async move { enter_checkout(&repo, &session, &cart, state).await }
    });
    let submit_action = create_action(move |_: &()| {
        let repo = repository.get_value();
        let session = session.get_value();
        let cart = cart.get_untracked();
        async move { submit_order(&repo, &session, &cart, state).await }
    });

    create_effect(move |_| untrack(|| enter_action.dispatch(())));
    create_effect(move |_| match state.redirect.get() {
        Some(Redirect::Internal(path)) => navigation::navigate_to(&path),
        Some(Redirect::External(url)) => navigation::replace_location(&url),
        None => {}
    });

    CheckoutViewModel {
        state,
        totals,
        submit_action,
    }
}

/// Runs the entry guard, then prefills the delivery form from the profile.
/// A guarded-out visitor never triggers a profile request.
pub async fn enter_checkout(
    repo: &CheckoutRepository,
    session: &Session,
    cart: &CartState,
    state: CheckoutState,
) -> Result<(), ApiError> {
    if let Some(path) = entry_redirect(session, cart) {
        state.phase.set(CheckoutPhase::Redirected);
        state.redirect.set(Some(Redirect::Internal(path.to_string())));
        return Ok(());
    }
    load_profile(repo, session, state).await
}

pub async fn load_profile(
    repo: &CheckoutRepository,
    session: &Session,
    state: CheckoutState,
) -> Result<(), ApiError> {
    state.phase.set(CheckoutPhase::LoadingProfile);
    let result = repo.fetch_profile(session).await;
    state.phase.set(CheckoutPhase::Ready);
    match result {
        Ok(profile) => {
            state.form.load(OrderAddress::from(profile));
            Ok(())
        }
        Err(err) => {
            log::error!("loading profile failed: {}", err);
            let notice = ApiError {
                error: profile_failure_message(&err),
                ..err.clone()
            };
            state.message.update(|msg| msg.set_error(notice));
            Err(err)
        }
    }
}

/// Validates the delivery form and places the order. Only a confirmed
/// `success` with a payment URL leaves the page.
pub async fn submit_order(
    repo: &CheckoutRepository,
    session: &Session,
    cart: &CartState,
    state: CheckoutState,
) -> Result<(), ApiError> {
    if !matches!(state.phase.get_untracked(), CheckoutPhase::Ready) {
        return Ok(());
    }
    if !OrderTotals::from_subtotal(cart.subtotal()).is_payable() {
        let err = ApiError::validation("Your cart is empty");
        state.message.update(|msg| msg.set_error(err.clone()));
        return Err(err);
    }
    let address = match state.form.to_address() {
        Ok(address) => address,
        Err(err) => {
            state.message.update(|msg| msg.set_error(err.clone()));
            return Err(err);
        }
    };

    state.message.update(MessageState::clear);
    state.phase.set(CheckoutPhase::Submitting);
    let order = build_order(address, cart);
    let outcome = match repo.place_order(session, &order).await {
        Ok(response) if response.success => response
            .session_url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ApiError::unknown("Order accepted without a payment URL")),
        Ok(response) => Err(ApiError::unknown(
            response
                .message
                .unwrap_or_else(|| "Order was not accepted".to_string()),
        )),
        Err(err) => Err(err),
    };

    match outcome {
        Ok(url) => {
            log::info!("order placed; redirecting to payment");
            state.phase.set(CheckoutPhase::Redirecting);
            state.redirect.set(Some(Redirect::External(url)));
            Ok(())
        }
        Err(err) => {
            log::error!("placing order failed: {}", err);
            state.phase.set(CheckoutPhase::Ready);
            let notice = ApiError {
                error: ORDER_FAILURE.to_string(),
                ..err.clone()
            };
            state.message.update(|msg| msg.set_error(notice));
            Err(err)
        }
    }
}

fn profile_failure_message(err: &ApiError) -> String {
    err.details
        .as_ref()
        .and_then(|body| body.get("message"))
        .and_then(|value| value.as_str())
        .filter(|msg| !msg.is_empty())
        .unwrap_or(PROFILE_FAILURE)
        .to_string()
}
