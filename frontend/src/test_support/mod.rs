#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{FoodItem, LeaveRequest, LeaveStatus};
    use crate::state::{cart::CartState, session::Session};
    use chrono::{TimeZone, Utc};
    use serde_json::Map;
    use std::collections::BTreeMap;

    pub fn signed_in() -> Session {
        Session {
            token: Some("tok-123".into()),
            user_id: Some("user-1".into()),
            requester: Some("rider@example.com".into()),
        }
    }

    pub fn food(id: &str, price: f64) -> FoodItem {
        FoodItem {
            id: id.into(),
            name: format!("Dish {}", id),
            price,
            extra: Map::new(),
        }
    }

    /// Two of `f1` at 12.0 and one of `f2` at 4.5; `f3` is listed but not in the cart.
    pub fn sample_cart() -> CartState {
        let mut quantities = BTreeMap::new();
        quantities.insert("f1".to_string(), 2);
        quantities.insert("f2".to_string(), 1);
        CartState::new(vec![food("f1", 12.0), food("f2", 4.5), food("f3", 9.0)], quantities)
    }

    pub fn leave_request(id: &str, requested_by: &str, reason: &str) -> LeaveRequest {
        LeaveRequest {
            id: id.into(),
            requested_by: requested_by.into(),
            date_from: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
            date_to: Utc.with_ymd_and_hms(2025, 3, 3, 0, 0, 0).unwrap(),
            reason: reason.into(),
            status: LeaveStatus::Pending,
        }
    }

    pub fn leave_request_json(id: &str, requested_by: &str, reason: &str, status: &str) -> serde_json::Value {
        serde_json::json!({
            "_id": id,
            "requestedBy": requested_by,
            "dateFrom": "2025-03-01T00:00:00.000Z",
            "dateTo": "2025-03-03T00:00:00.000Z",
            "reason": reason,
            "status": status
        })
    }
}
