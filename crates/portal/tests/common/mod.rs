#![allow(dead_code)]

use axum::{
    Form, Json, Router,
    extract::{Multipart, Path, Query, Request, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post, put},
};
use async_trait::async_trait;
use jsonwebtoken::{EncodingKey, Header};
use portal::{
    abstract_trait::navigator::DynNavigator, navigation::HistoryNavigator, state::AppState,
};
use serde_json::{Value, json};
use shared::{
    abstract_trait::{DynTokenStorage, TokenStorageTrait},
    cache::{ACCESS_TOKEN_KEY, MemoryStorage, REFRESH_TOKEN_KEY},
    config::Config,
    errors::StorageError,
};
use std::{
    collections::{HashMap, HashSet},
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::{Duration, SystemTime, UNIX_EPOCH},
};

const SIGNING_SECRET: &[u8] = b"backend-only-secret";
pub const PASSWORD: &str = "secret";
pub const OTP: &str = "123456";

#[derive(Debug, Clone)]
pub struct Seen {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub request_id: Option<String>,
}

/// Storage whose reads and writes can be made to fail, as with a full disk.
#[derive(Debug, Default)]
pub struct FlakyStorage {
    inner: MemoryStorage,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
}

impl FlakyStorage {
    fn check(flag: &AtomicBool) -> Result<(), StorageError> {
        if flag.load(Ordering::SeqCst) {
            return Err(StorageError::Io(std::io::Error::other("disk full")));
        }
        Ok(())
    }
}

#[async_trait]
impl TokenStorageTrait for FlakyStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::check(&self.fail_reads)?;
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::check(&self.fail_writes)?;
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::check(&self.fail_writes)?;
        self.inner.remove(key).await
    }

    async fn clear(&self) -> Result<(), StorageError> {
        Self::check(&self.fail_writes)?;
        self.inner.clear().await
    }
}

/// In-process stand-in for the portal API.
pub struct Backend {
    pub valid_tokens: Mutex<HashSet<String>>,
    pub refresh_tokens: Mutex<HashSet<String>>,
    pub role: Mutex<String>,
    pub users: Mutex<Vec<Value>>,
    pub last_form: Mutex<Vec<(String, String)>>,
    pub seen: Mutex<Vec<Seen>>,
    pub refresh_calls: AtomicUsize,
    pub login_calls: AtomicUsize,
    pub issued: AtomicUsize,
    pub reject_all: AtomicBool,
    pub forbid: AtomicBool,
    pub refresh_broken: AtomicBool,
    pub fail_role_update: AtomicBool,
}

impl Backend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            valid_tokens: Mutex::default(),
            refresh_tokens: Mutex::default(),
            role: Mutex::new("ADMIN".into()),
            users: Mutex::new(vec![
                json!({"id": 1, "first_name": "Ann", "last_name": "Lee", "email": "ann@school.test", "role": "STUDENT", "is_active": true}),
                json!({"id": 2, "first_name": "Bo", "last_name": "Park", "email": "bo@school.test", "role": "STUDENT", "is_active": true}),
                json!({"id": 3, "first_name": "Cy", "last_name": "Diaz", "email": "cy@school.test", "role": "INSTRUCTOR", "is_active": true}),
            ]),
            last_form: Mutex::default(),
            seen: Mutex::default(),
            refresh_calls: AtomicUsize::new(0),
            login_calls: AtomicUsize::new(0),
            issued: AtomicUsize::new(0),
            reject_all: AtomicBool::new(false),
            forbid: AtomicBool::new(false),
            refresh_broken: AtomicBool::new(false),
            fail_role_update: AtomicBool::new(false),
        })
    }

    pub fn set_role(&self, role: &str) {
        *self.role.lock().unwrap() = role.to_string();
    }

    pub fn mint(&self, ttl_secs: i64) -> String {
        let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs() as i64;
        let n = self.issued.fetch_add(1, Ordering::SeqCst);
        let claims = json!({
            "id": 1,
            "email": "ann@school.test",
            "role": self.role.lock().unwrap().clone(),
            "exp": now + ttl_secs,
            "n": n,
        });
        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SIGNING_SECRET),
        )
        .unwrap()
    }

    /// Issues a live token pair the backend will accept.
    pub fn issue_session(&self) -> (String, String) {
        let access = self.mint(600);
        let refresh = format!("refresh-{}", self.issued.fetch_add(1, Ordering::SeqCst));
        self.valid_tokens.lock().unwrap().insert(access.clone());
        self.refresh_tokens.lock().unwrap().insert(refresh.clone());
        (access, refresh)
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    pub fn seen_path(&self, path: &str) -> Vec<Seen> {
        self.seen().into_iter().filter(|s| s.path == path).collect()
    }

    fn authorize(&self, headers: &HeaderMap) -> Result<(), Response> {
        if self.forbid.load(Ordering::SeqCst) {
            return Err(error(StatusCode::FORBIDDEN, json!({"detail": "Not enough permissions"})));
        }

        let token = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        match token {
            Some(token)
                if !self.reject_all.load(Ordering::SeqCst)
                    && self.valid_tokens.lock().unwrap().contains(token) =>
            {
                Ok(())
            }
            _ => Err(error(
                StatusCode::UNAUTHORIZED,
                json!({"detail": "Could not validate credentials"}),
            )),
        }
    }

    fn profile(&self) -> Value {
        json!({
            "user": {
                "id": 1,
                "first_name": "Ann",
                "last_name": "Lee",
                "email": "ann@school.test",
                "role": self.role.lock().unwrap().clone(),
                "is_verified": true,
                "school": [{
                    "name": "Apollo High School",
                    "description": "Main campus",
                    "address": "1 Apollo Way",
                    "latitude": 40.1,
                    "longitude": -75.2,
                    "zipcode": "19000"
                }]
            },
            "profile": {
                "cell_phone": 5551234,
                "gender": "FEMALE",
                "dob": "2004-02-29",
                "city": "Springfield",
                "contact_information": [],
                "pickup_location": []
            }
        })
    }
}

fn error(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

async fn record(State(backend): State<Arc<Backend>>, request: Request, next: Next) -> Response {
    let seen = {
        let headers = request.headers();
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };

        Seen {
            method: request.method().to_string(),
            path: request.uri().path().to_string(),
            query: request.uri().query().map(str::to_string),
            authorization: header("authorization"),
            request_id: header("x-request-id"),
        }
    };
    backend.seen.lock().unwrap().push(seen);

    next.run(request).await
}

async fn login(
    State(backend): State<Arc<Backend>>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    backend.login_calls.fetch_add(1, Ordering::SeqCst);

    let email = form.get("username").cloned().unwrap_or_default();
    if email.starts_with("unverified") {
        return error(
            StatusCode::UNAUTHORIZED,
            json!({"detail": "Please verify your email to login"}),
        );
    }
    if form.get("password").map(String::as_str) != Some(PASSWORD) {
        return error(
            StatusCode::UNAUTHORIZED,
            json!({"detail": "Incorrect email or password"}),
        );
    }

    let (access_token, refresh_token) = backend.issue_session();
    Json(json!({
        "id": 1,
        "email": email,
        "role": backend.role.lock().unwrap().clone(),
        "access_token": access_token,
        "refresh_token": refresh_token,
        "token_type": "bearer"
    }))
    .into_response()
}

async fn refresh(
    State(backend): State<Arc<Backend>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    backend.refresh_calls.fetch_add(1, Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(50)).await;

    let known = params
        .get("refresh_token")
        .is_some_and(|t| backend.refresh_tokens.lock().unwrap().contains(t));

    if backend.refresh_broken.load(Ordering::SeqCst) || !known {
        return error(
            StatusCode::UNAUTHORIZED,
            json!({"detail": "Invalid refresh token"}),
        );
    }

    let access_token = backend.mint(600);
    backend
        .valid_tokens
        .lock()
        .unwrap()
        .insert(access_token.clone());

    Json(json!({"access_token": access_token, "token_type": "bearer"})).into_response()
}

async fn register(Json(body): Json<Value>) -> Response {
    if body["role"] != "STUDENT" {
        return error(StatusCode::BAD_REQUEST, json!({"detail": "Invalid role"}));
    }
    Json(json!({"message": "User created successfully. Please check your email to verify your account."}))
        .into_response()
}

async fn forget_password(Query(params): Query<HashMap<String, String>>) -> Response {
    match params.get("email") {
        Some(email) if email.ends_with("@school.test") => {
            Json(json!({"message": "OTP sent to your email"})).into_response()
        }
        _ => error(StatusCode::NOT_FOUND, json!({"detail": "User not found"})),
    }
}

async fn verify_otp(
    State(backend): State<Arc<Backend>>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    *backend.last_form.lock().unwrap() = form.clone().into_iter().collect();

    match form.get("otp").map(String::as_str) {
        Some(OTP) => Json(json!({"message": "OTP verified successfully"})).into_response(),
        _ => error(
            StatusCode::NOT_FOUND,
            json!({"detail": "OTP doesn't match or expired. Please try again."}),
        ),
    }
}

async fn reset_password(
    State(backend): State<Arc<Backend>>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    *backend.last_form.lock().unwrap() = form.clone().into_iter().collect();

    if form.get("otp").map(String::as_str) != Some(OTP) {
        return error(
            StatusCode::NOT_FOUND,
            json!({"detail": "OTP doesn't match or expired. Please try again."}),
        );
    }
    if form.get("new_password") != form.get("confirm_password") {
        return error(StatusCode::BAD_REQUEST, json!({"detail": "Passwords do not match"}));
    }

    Json(json!({"message": "Password reset successfully"})).into_response()
}

async fn profile_get(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Response {
    if let Err(response) = backend.authorize(&headers) {
        return response;
    }
    Json(backend.profile()).into_response()
}

async fn profile_update(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    if let Err(response) = backend.authorize(&headers) {
        return response;
    }

    let mut fields = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await.unwrap();
        fields.push((name, value));
    }
    *backend.last_form.lock().unwrap() = fields;

    Json(json!({"message": "Profile updated"})).into_response()
}

async fn users_get(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Err(response) = backend.authorize(&headers) {
        return response;
    }

    let role = params.get("role").cloned().unwrap_or_else(|| "ALL".into());
    let users: Vec<Value> = backend
        .users
        .lock()
        .unwrap()
        .iter()
        .filter(|u| role == "ALL" || u["role"] == role.as_str())
        .cloned()
        .collect();

    Json(json!({"total_count": users.len(), "users": users})).into_response()
}

async fn user_get(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    if let Err(response) = backend.authorize(&headers) {
        return response;
    }

    let user = backend
        .users
        .lock()
        .unwrap()
        .iter()
        .find(|u| u["id"] == id)
        .cloned();

    match user {
        Some(user) => Json(user).into_response(),
        None => error(StatusCode::NOT_FOUND, json!({"detail": "User not found"})),
    }
}

async fn user_create(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(response) = backend.authorize(&headers) {
        return response;
    }

    let mut users = backend.users.lock().unwrap();
    if users.iter().any(|u| u["email"] == body["email"]) {
        return error(StatusCode::CONFLICT, json!({"detail": "Email already registered"}));
    }

    let id = users.len() as i64 + 1;
    users.push(json!({
        "id": id,
        "first_name": body["first_name"],
        "last_name": body["last_name"],
        "email": body["email"],
        "role": body["role"],
        "is_active": true
    }));

    Json(json!({"message": "User created"})).into_response()
}

async fn user_delete(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    if let Err(response) = backend.authorize(&headers) {
        return response;
    }

    backend.users.lock().unwrap().retain(|u| u["id"] != id);
    StatusCode::NO_CONTENT.into_response()
}

async fn user_role(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Err(response) = backend.authorize(&headers) {
        return response;
    }

    if backend.fail_role_update.load(Ordering::SeqCst) {
        return error(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"message": "Role update failed"}),
        );
    }

    let role = params.get("role").cloned().unwrap_or_default();
    for user in backend.users.lock().unwrap().iter_mut() {
        if user["id"] == id {
            user["role"] = Value::String(role.clone());
        }
    }

    Json(json!({"message": "User role updated"})).into_response()
}

async fn accounts_get(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Response {
    if let Err(response) = backend.authorize(&headers) {
        return response;
    }

    Json(json!({
        "total": 2,
        "transactions": [
            {"id": 10, "user_id": 1, "amount": 250.0, "discount": 25.0, "method": "DEBIT_CARD",
             "user": {"id": 1, "first_name": "Ann"}},
            {"id": 11, "user_id": 1, "amount": 80.0, "method": "CASH", "refund": true,
             "user": {"id": 1, "first_name": "Ann"}}
        ]
    }))
    .into_response()
}

async fn schools_get(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Response {
    if let Err(response) = backend.authorize(&headers) {
        return response;
    }

    Json(json!({
        "total_count": 1,
        "school": [{"id": 1, "name": "Apollo High School", "description": "", "address": "",
                    "latitude": 0.0, "longitude": 0.0, "zipcode": "19000"}]
    }))
    .into_response()
}

pub struct TestServer {
    pub base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub async fn spawn(backend: Arc<Backend>) -> Self {
        let app = Router::new()
            .route("/auth/login", post(login))
            .route("/auth/register", post(register))
            .route("/auth/token/refresh-token", post(refresh))
            .route("/auth/password/forget", get(forget_password))
            .route("/auth/password/verify-otp", post(verify_otp))
            .route("/auth/password/reset", post(reset_password))
            .route("/profile/get", get(profile_get))
            .route("/profile/update", put(profile_update))
            .route("/user/get", get(users_get))
            .route("/user/get/{id}", get(user_get))
            .route("/user/post", put(user_create))
            .route("/user/delete/{id}", delete(user_delete))
            .route("/user/update/role/{id}", patch(user_role))
            .route("/account/get", get(accounts_get))
            .route("/school/get", get(schools_get))
            .layer(middleware::from_fn_with_state(backend.clone(), record))
            .with_state(backend);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{addr}");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A running mock backend plus a fully wired client pointed at it.
pub struct Harness {
    pub server: TestServer,
    pub backend: Arc<Backend>,
    pub storage: DynTokenStorage,
    pub navigator: Arc<HistoryNavigator>,
    pub state: AppState,
}

impl Harness {
    pub async fn start() -> Self {
        Self::with_storage(Backend::new(), Arc::new(MemoryStorage::new())).await
    }

    pub async fn with_storage(backend: Arc<Backend>, storage: DynTokenStorage) -> Self {
        let server = TestServer::spawn(backend.clone()).await;
        let navigator = Arc::new(HistoryNavigator::new("/"));

        let mut config = Config::new(&server.base_url);
        config.request_timeout = Duration::from_secs(5);

        let state = AppState::with_parts(config, storage.clone(), navigator.clone() as DynNavigator)
            .await
            .expect("failed to build app state");

        Self {
            server,
            backend,
            storage,
            navigator,
            state,
        }
    }

    /// Puts a token pair in storage as if a previous run had signed in.
    pub async fn seed_tokens(&self, access: &str, refresh: &str) {
        self.storage.set(ACCESS_TOKEN_KEY, access).await.unwrap();
        self.storage.set(REFRESH_TOKEN_KEY, refresh).await.unwrap();
    }

    pub async fn stored(&self, key: &str) -> Option<String> {
        self.storage.get(key).await.unwrap()
    }
}
