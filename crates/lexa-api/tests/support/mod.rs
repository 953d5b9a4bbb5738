//! In-process fake of the marketplace backend for integration tests.
//!
//! Routes are matched on method and path (query ignored). Each route holds
//! a queue of canned responses; the last one repeats. Unmatched requests
//! get a 404. Every request is recorded for assertions.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;

use lexa_api::ApiClient;
use lexa_auth::{SessionContext, StoredSession};
use lexa_config::ApiConfig;
use lexa_core::entities::UserAccount;
use tiny_http::{Header, Response, Server, StatusCode};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl Recorded {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

#[derive(Debug, Clone)]
struct Canned {
    status: u16,
    body: String,
    headers: Vec<(String, String)>,
}

#[derive(Debug)]
struct Route {
    method: String,
    path: String,
    responses: VecDeque<Canned>,
}

impl Route {
    fn next(&mut self) -> Canned {
        if self.responses.len() > 1 {
            self.responses.pop_front().expect("non-empty")
        } else {
            self.responses.front().cloned().expect("route has a response")
        }
    }
}

type Shared<T> = Arc<Mutex<T>>;

pub struct FakeBackend {
    server: Arc<Server>,
    base_url: String,
    routes: Shared<Vec<Route>>,
    requests: Shared<Vec<Recorded>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl FakeBackend {
    pub fn start() -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").expect("bind fake backend"));
        let base_url = format!("http://{}", server.server_addr());
        let routes: Shared<Vec<Route>> = Arc::default();
        let requests: Shared<Vec<Recorded>> = Arc::default();

        let handle = {
            let server = Arc::clone(&server);
            let routes = Arc::clone(&routes);
            let requests = Arc::clone(&requests);
            thread::spawn(move || {
                while let Ok(mut req) = server.recv() {
                    let (path, query) = match req.url().split_once('?') {
                        Some((p, q)) => (p.to_string(), Some(q.to_string())),
                        None => (req.url().to_string(), None),
                    };
                    let header = |name: &'static str| {
                        req.headers()
                            .iter()
                            .find(|h| h.field.equiv(name))
                            .map(|h| h.value.as_str().to_string())
                    };
                    let authorization = header("Authorization");
                    let content_type = header("Content-Type");
                    let method = req.method().to_string();
                    let mut raw = Vec::new();
                    let _ = req.as_reader().read_to_end(&mut raw);
                    requests.lock().expect("requests lock").push(Recorded {
                        method: method.clone(),
                        path: path.clone(),
                        query,
                        authorization,
                        content_type,
                        body: String::from_utf8_lossy(&raw).into_owned(),
                    });

                    let canned = routes
                        .lock()
                        .expect("routes lock")
                        .iter_mut()
                        .find(|r| r.method == method && r.path == path)
                        .map(Route::next);
                    let response = match canned {
                        Some(canned) => {
                            let mut response = Response::from_string(canned.body)
                                .with_status_code(StatusCode(canned.status))
                                .with_header(
                                    Header::from_bytes("Content-Type", "application/json")
                                        .expect("header"),
                                );
                            for (name, value) in canned.headers {
                                response = response.with_header(
                                    Header::from_bytes(name.as_bytes(), value.as_bytes())
                                        .expect("ASCII header"),
                                );
                            }
                            response
                        }
                        None => Response::from_string("").with_status_code(StatusCode(404)),
                    };
                    let _ = req.respond(response);
                }
            })
        };

        Self {
            server,
            base_url,
            routes,
            requests,
            handle: Some(handle),
        }
    }

    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Queue a JSON response for `method path`.
    pub fn on(&self, method: &str, path: &str, status: u16, body: impl Into<String>) -> &Self {
        self.push(method, path, status, body.into(), Vec::new());
        self
    }

    /// Like [`Self::on`] with one extra response header. tiny_http only
    /// carries ASCII header values, so non-ASCII reasons are covered by the
    /// unit tests in `http.rs`.
    pub fn on_with_header(
        &self,
        method: &str,
        path: &str,
        status: u16,
        body: impl Into<String>,
        header: (&str, &str),
    ) -> &Self {
        assert!(header.1.is_ascii(), "tiny_http cannot send header value {:?}", header.1);
        self.push(
            method,
            path,
            status,
            body.into(),
            vec![(header.0.to_string(), header.1.to_string())],
        );
        self
    }

    fn push(&self, method: &str, path: &str, status: u16, body: String, headers: Vec<(String, String)>) {
        let canned = Canned {
            status,
            body,
            headers,
        };
        let mut routes = self.routes.lock().expect("routes lock");
        if let Some(route) = routes
            .iter_mut()
            .find(|r| r.method == method && r.path == path)
        {
            route.responses.push_back(canned);
        } else {
            routes.push(Route {
                method: method.to_string(),
                path: path.to_string(),
                responses: VecDeque::from([canned]),
            });
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub fn client(&self, session: SessionContext) -> ApiClient {
        let config = ApiConfig {
            url: self.base_url.clone(),
            ..ApiConfig::default()
        };
        ApiClient::new(&config, session).expect("client builds")
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

// ── Fixtures ───────────────────────────────────────────────────────────

pub fn signed_in(user_id: &str, role: &str) -> SessionContext {
    SessionContext::in_memory(Some(StoredSession {
        token: format!("jwt-{user_id}"),
        user: Some(UserAccount {
            id: user_id.to_string(),
            username: user_id.to_string(),
            roles: vec![role.to_string()],
        }),
    }))
}

pub fn case_json(id: &str, client_id: &str, status: &str, lawyer: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": format!("Caso {id}"),
        "description": "Necesito asesoría",
        "clientId": client_id,
        "assignedLawyerId": lawyer,
        "specialtyId": 3,
        "status": status,
        "createdAt": "2025-03-01T10:00:00",
        "updatedAt": "2025-03-02T10:00:00",
    })
}

pub fn document_json(id: &str, case_id: &str, filename: &str, uploaded_by: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "caseId": case_id,
        "filename": filename,
        "fileUrl": null,
        "fileSize": 4,
        "fileType": "application/pdf",
        "uploadedBy": uploaded_by,
        "uploadedAt": "2025-03-03T09:00:00",
    })
}

pub fn application_json(id: &str, case_id: &str, lawyer_id: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "caseId": case_id,
        "lawyerId": lawyer_id,
        "message": "Puedo ayudarle",
        "status": status,
        "createdAt": "2025-03-02T12:00:00",
    })
}

pub fn invitation_json(id: &str, case_id: &str, lawyer_id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "caseId": case_id,
        "lawyerId": lawyer_id,
        "message": "hola",
        "status": "PENDING",
        "createdAt": "2025-03-02T12:00:00",
    })
}

pub fn lawyer_json(user_id: &str, firstname: &str, lastname: &str) -> serde_json::Value {
    serde_json::json!({
        "id": format!("lp-{user_id}"),
        "userId": user_id,
        "fullName": { "firstname": firstname, "lastname": lastname },
        "dni": "12345678",
        "contactInfo": { "phoneNumber": "999", "address": "Lima" },
        "description": "",
        "specialties": ["FAMILY_LAW"],
    })
}

pub fn client_json(user_id: &str, firstname: &str, lastname: &str) -> serde_json::Value {
    serde_json::json!({
        "id": format!("cp-{user_id}"),
        "userId": user_id,
        "fullName": { "firstname": firstname, "lastname": lastname },
        "dni": "87654321",
        "contactInfo": { "phoneNumber": "888", "address": "Cusco" },
    })
}
