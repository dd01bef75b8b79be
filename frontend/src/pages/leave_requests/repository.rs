use crate::api::{ApiClient, ApiError, LeaveRequest, LeaveStatus};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveRequestsRepository {
    client: Rc<ApiClient>,
}

impl LeaveRequestsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.list_leave_requests().await
    }

    pub async fn update_status(&self, id: &str, status: LeaveStatus) -> Result<(), ApiError> {
        self.client.update_leave_status(id, status).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_leave_request(id).await
    }
}
