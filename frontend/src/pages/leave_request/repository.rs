use crate::api::{ApiClient, ApiError, CreateLeaveRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveRequestRepository {
    client: Rc<ApiClient>,
}

impl LeaveRequestRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn submit(&self, payload: &CreateLeaveRequest) -> Result<(), ApiError> {
        self.client.create_leave_request(payload).await
    }
}
