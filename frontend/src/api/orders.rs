use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, PlaceOrderRequest, PlaceOrderResponse, UserProfile, UserProfileResponse},
};
use crate::state::session::Session;

impl ApiClient {
    pub async fn get_user_profile(&self, session: &Session) -> Result<UserProfile, ApiError> {
        let headers = Self::auth_headers(session)?;
        let user_id = session
            .user_id
            .as_deref()
            .ok_or_else(|| ApiError::unauthorized("No user id"))?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/user/{}", base_url, encode_segment(user_id)))
                    .headers(headers),
            )
            .await?;
        let body: UserProfileResponse = self.map_json_response(response).await?;
        Ok(body.user)
    }

    pub async fn place_order(
        &self,
        session: &Session,
        order: &PlaceOrderRequest,
    ) -> Result<PlaceOrderResponse, ApiError> {
        let headers = Self::auth_headers(session)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/order/place", base_url))
                    .headers(headers)
                    .json(order),
            )
            .await?;
        self.map_json_response(response).await
    }
}
