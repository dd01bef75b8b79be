use crate::api::{ApiClient, ApiError, PlaceOrderRequest, PlaceOrderResponse, UserProfile};
use crate::state::session::Session;
use std::rc::Rc;

#[derive(Clone)]
pub struct CheckoutRepository {
    client: Rc<ApiClient>,
}

impl CheckoutRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_profile(&self, session: &Session) -> Result<UserProfile, ApiError> {
        self.client.get_user_profile(session).await
    }

    pub async fn place_order(
        &self,
        session: &Session,
        order: &PlaceOrderRequest,
    ) -> Result<PlaceOrderResponse, ApiError> {
        self.client.place_order(session, order).await
    }
}
