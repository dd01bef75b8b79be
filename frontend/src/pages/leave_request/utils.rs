use crate::api::{ApiError, CreateLeaveRequest};
use crate::utils::time::{parse_date_input, start_of_day_utc};
use chrono::NaiveDate;
use leptos::*;

pub const SUBMIT_SUCCESS: &str = "Leave request submitted successfully";
pub const SUBMIT_FAILURE: &str = "Failed to submit leave request";

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    date_from: RwSignal<String>,
    date_to: RwSignal<String>,
    reason: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            date_from: create_rw_signal(String::new()),
            date_to: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn from_signal(&self) -> RwSignal<String> {
        self.date_from
    }

    pub fn to_signal(&self) -> RwSignal<String> {
        self.date_to
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn reset(&self) {
        self.date_from.set(String::new());
        self.date_to.set(String::new());
        self.reason.set(String::new());
    }

    /// True when a submit would pass client-side checks: both dates parse,
    /// the range is not inverted and a reason is given. Tracks the inputs.
    pub fn is_valid(&self) -> bool {
        let range = self
            .date_from
            .with(|from| self.date_to.with(|to| parse_range(from, to)));
        range.is_ok() && self.reason.with(|reason| !reason.trim().is_empty())
    }

    pub fn to_payload(self, requester: Option<&str>) -> Result<CreateLeaveRequest, ApiError> {
        let (from, to) = self
            .date_from
            .with_untracked(|from| self.date_to.with_untracked(|to| parse_range(from, to)))?;
        let reason = self.reason.get_untracked().trim().to_string();
        if reason.is_empty() {
            return Err(ApiError::validation("Please enter reason for leave"));
        }
        let requested_by = requester
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ApiError::validation("No requester is signed in"))?;
        Ok(CreateLeaveRequest {
            requested_by: requested_by.to_string(),
            date_from: start_of_day_utc(from),
            date_to: start_of_day_utc(to),
            reason,
        })
    }
}

fn parse_range(from_raw: &str, to_raw: &str) -> Result<(NaiveDate, NaiveDate), ApiError> {
    if from_raw.trim().is_empty() || to_raw.trim().is_empty() {
        return Err(ApiError::validation("Please select date range"));
    }
    let from = parse_date_input(from_raw)
        .ok_or_else(|| ApiError::validation("Start date must be YYYY-MM-DD"))?;
    let to = parse_date_input(to_raw)
        .ok_or_else(|| ApiError::validation("End date must be YYYY-MM-DD"))?;
    if to < from {
        return Err(ApiError::validation("End date must not be before start date"));
    }
    Ok((from, to))
}
