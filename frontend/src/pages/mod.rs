pub mod cart;
pub mod home;
pub mod leave_request;
pub mod leave_requests;
pub mod place_order;

pub use cart::CartPage;
pub use home::HomePage;
pub use leave_request::LeaveRequestPage;
pub use leave_requests::LeaveRequestsPage;
pub use place_order::PlaceOrderPage;
