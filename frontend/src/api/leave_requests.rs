use super::{
    client::{encode_segment, ApiClient},
    types::{
        ApiError, CreateLeaveRequest, LeaveRequest, LeaveRequestListResponse, LeaveStatus,
        UpdateLeaveStatus,
    },
};

impl ApiClient {
    pub async fn create_leave_request(&self, request: &CreateLeaveRequest) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/leave-requests", base_url))
                    .json(request),
            )
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn list_leave_requests(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/leave-requests", base_url)),
            )
            .await?;
        let list: LeaveRequestListResponse = self.map_json_response(response).await?;
        Ok(list.data)
    }

    pub async fn update_leave_status(&self, id: &str, status: LeaveStatus) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/leave-requests/{}", base_url, encode_segment(id)))
                    .json(&UpdateLeaveStatus { status }),
            )
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn delete_leave_request(&self, id: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .delete(format!("{}/leave-requests/{}", base_url, encode_segment(id))),
            )
            .await?;
        self.map_empty_response(response).await
    }
}
