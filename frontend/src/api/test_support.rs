#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex, MutexGuard};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const PUT: Method = Method::PUT;
    pub const DELETE: Method = Method::DELETE;

    type RouteKey = (Method, String);

    /// In-process stand-in for the delivery backend. Each server gets its own
    /// host name, so tests running in parallel never see each other's routes.
    #[derive(Clone)]
    pub struct MockServer {
        state: Arc<Mutex<ServerState>>,
        host: String,
    }

    #[derive(Default)]
    struct ServerState {
        routes: HashMap<RouteKey, MockResponse>,
        log: Vec<ReceivedRequest>,
    }

    #[derive(Clone, Debug)]
    pub struct ReceivedRequest {
        pub method: Method,
        pub path: String,
        pub headers: Vec<(String, String)>,
        pub body: Option<Value>,
    }

    impl ReceivedRequest {
        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find_map(|(key, value)| key.eq_ignore_ascii_case(name).then_some(value.as_str()))
        }
    }

    impl MockServer {
        pub async fn start_async() -> Self {
            static SERVERS: AtomicUsize = AtomicUsize::new(0);
            let n = SERVERS.fetch_add(1, Ordering::Relaxed);
            Self {
                state: Arc::default(),
                host: format!("http://delivery-mock-{}", n),
            }
        }

        /// Base URL for an `ApiClient`; registers this server for it.
        pub fn url(&self, prefix: &str) -> String {
            let base = format!("{}{}", self.host, prefix);
            register_mock(base.clone(), Arc::new(self.clone()));
            base
        }

        /// Adds or replaces the answer for one method and path.
        pub fn mock(&self, f: impl FnOnce(&mut When, &mut Then)) {
            let mut when = When {
                key: (GET, "/".to_string()),
            };
            let mut then = Then {
                response: MockResponse::json(200, json!({})),
            };
            f(&mut when, &mut then);
            self.lock().routes.insert(when.key, then.response);
        }

        pub fn received(&self) -> Vec<ReceivedRequest> {
            self.lock().log.clone()
        }

        pub fn hits(&self, method: Method, path: &str) -> usize {
            self.lock()
                .log
                .iter()
                .filter(|req| req.method == method && req.path == path)
                .count()
        }

        pub fn total_hits(&self) -> usize {
            self.lock().log.len()
        }

        fn lock(&self) -> MutexGuard<'_, ServerState> {
            self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
        }
    }

    fn header_pairs(request: &reqwest::Request) -> Vec<(String, String)> {
        request
            .headers()
            .iter()
            .filter_map(|(key, value)| Some((key.to_string(), value.to_str().ok()?.to_string())))
            .collect()
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let key = (request.method().clone(), request.url().path().to_string());
            let body = request
                .body()
                .and_then(|body| body.as_bytes())
                .and_then(|bytes| serde_json::from_slice(bytes).ok());

            let mut state = self.lock();
            state.log.push(ReceivedRequest {
                method: key.0.clone(),
                path: key.1.clone(),
                headers: header_pairs(request),
                body,
            });
            state
                .routes
                .get(&key)
                .cloned()
                .ok_or_else(|| ApiError::unknown(format!("No mock for {} {}", key.0, key.1)))
        }
    }

    pub struct When {
        key: RouteKey,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.key.0 = method;
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.key.1 = path.to_string();
            self
        }
    }

    pub struct Then {
        response: MockResponse,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.response.status = status;
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.response.body = body;
            self
        }
    }
}
