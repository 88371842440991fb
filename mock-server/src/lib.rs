use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub const CONTEXT: &str = "/pa-admin-api/v3";
pub const DEFAULT_USERNAME: &str = "Administrator";
pub const DEFAULT_PASSWORD: &str = "2Access";
pub const VERSION: &str = "6.3.2";

const COLLECTIONS: [&str; 3] = ["applications", "sites", "virtualhosts"];

pub struct Store {
    license: Value,
    users: BTreeMap<i64, Value>,
    collections: HashMap<&'static str, BTreeMap<i64, Value>>,
    next_id: i64,
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Clone)]
pub struct MockState {
    db: Db,
    username: String,
    password: String,
}

impl Default for MockState {
    fn default() -> Self {
        Self::new()
    }
}

impl MockState {
    pub fn new() -> Self {
        let mut users = BTreeMap::new();
        users.insert(
            1,
            json!({
                "id": 1,
                "username": DEFAULT_USERNAME,
                "firstLogin": false,
                "showTutorial": false,
                "slaAccepted": true
            }),
        );
        let store = Store {
            license: json!({
                "id": 1,
                "name": "PingAccess",
                "organization": "Example Corp",
                "product": "PingAccess",
                "version": "6.3",
                "tier": "Enterprise",
                "trackingId": "mock-tracking-id"
            }),
            users,
            collections: COLLECTIONS.iter().map(|c| (*c, BTreeMap::new())).collect(),
            next_id: 1,
        };
        Self {
            db: Arc::new(RwLock::new(store)),
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }

    /// Replace the body served by `GET /license`.
    pub fn with_license(self, license: Value) -> Self {
        if let Ok(mut store) = self.db.try_write() {
            store.license = license;
        }
        self
    }

    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.username = username.to_string();
        self.password = password.to_string();
        self
    }

    fn expected_authorization(&self) -> String {
        let credentials = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(credentials))
    }
}

pub fn app() -> Router {
    app_with_state(MockState::new())
}

pub fn app_with_state(state: MockState) -> Router {
    let api = Router::new()
        .route("/version", get(get_version))
        .route("/license", get(get_license))
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user).put(update_user))
        .route("/config/export", get(export_config))
        .route("/{collection}", get(list_items).post(create_item))
        .route(
            "/{collection}/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .with_state(state);
    Router::new().nest(CONTEXT, api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_state(listener, MockState::new()).await
}

pub async fn run_with_state(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

fn not_found() -> Response {
    error(StatusCode::NOT_FOUND, "not found")
}

async fn require_admin(State(state): State<MockState>, request: Request, next: Next) -> Response {
    let headers = request.headers();
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == state.expected_authorization());
    if !authorized {
        return error(StatusCode::UNAUTHORIZED, "authentication required");
    }
    if !headers.contains_key("x-xsrf-header") {
        return error(StatusCode::FORBIDDEN, "missing X-XSRF-Header");
    }
    tracing::debug!(method = %request.method(), uri = %request.uri(), "admin request");
    next.run(request).await
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page: Option<usize>,
    pub number_per_page: Option<usize>,
    pub name: Option<String>,
}

impl ListQuery {
    fn apply<'a>(&self, items: impl Iterator<Item = &'a Value>) -> Vec<Value> {
        let filtered = items.filter(|item| match &self.name {
            Some(name) => item.get("name").and_then(Value::as_str) == Some(name.as_str()),
            None => true,
        });
        let per_page = self.number_per_page.unwrap_or(usize::MAX);
        let skip = self.page.unwrap_or(1).saturating_sub(1).saturating_mul(per_page);
        filtered.skip(skip).take(per_page).cloned().collect()
    }
}

async fn get_version() -> Json<Value> {
    Json(json!({ "version": VERSION }))
}

async fn get_license(State(state): State<MockState>) -> Json<Value> {
    let store = state.db.read().await;
    Json(store.license.clone())
}

async fn list_users(State(state): State<MockState>, Query(query): Query<ListQuery>) -> Json<Value> {
    let store = state.db.read().await;
    Json(json!({ "items": query.apply(store.users.values()) }))
}

async fn get_user(State(state): State<MockState>, Path(id): Path<i64>) -> Response {
    let store = state.db.read().await;
    match store.users.get(&id) {
        Some(user) => Json(user.clone()).into_response(),
        None => not_found(),
    }
}

async fn update_user(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    Json(input): Json<Value>,
) -> Response {
    let mut store = state.db.write().await;
    let Some(user) = store.users.get_mut(&id) else {
        return not_found();
    };
    merge(user, input);
    user["id"] = json!(id);
    Json(user.clone()).into_response()
}

async fn export_config(State(state): State<MockState>) -> Json<Value> {
    let store = state.db.read().await;
    let mut data = serde_json::Map::new();
    for (name, items) in &store.collections {
        data.insert(name.to_string(), Value::from(items.values().cloned().collect::<Vec<_>>()));
    }
    data.insert("users".to_string(), Value::from(store.users.values().cloned().collect::<Vec<_>>()));
    Json(json!({ "version": VERSION, "data": data }))
}

fn collection_key(name: &str) -> Option<&'static str> {
    COLLECTIONS.iter().copied().find(|c| *c == name)
}

async fn list_items(
    State(state): State<MockState>,
    Path(collection): Path<String>,
    Query(query): Query<ListQuery>,
) -> Response {
    let Some(key) = collection_key(&collection) else {
        return not_found();
    };
    let store = state.db.read().await;
    let items = store.collections.get(key).map(|c| query.apply(c.values())).unwrap_or_default();
    Json(json!({ "items": items })).into_response()
}

async fn create_item(
    State(state): State<MockState>,
    Path(collection): Path<String>,
    Json(mut input): Json<Value>,
) -> Response {
    let Some(key) = collection_key(&collection) else {
        return not_found();
    };
    if !input.is_object() {
        return error(StatusCode::UNPROCESSABLE_ENTITY, "expected a JSON object");
    }
    let mut store = state.db.write().await;
    let id = store.next_id;
    store.next_id += 1;
    input["id"] = json!(id);
    store.collections.entry(key).or_default().insert(id, input.clone());
    Json(input).into_response()
}

async fn get_item(
    State(state): State<MockState>,
    Path((collection, id)): Path<(String, i64)>,
) -> Response {
    let Some(key) = collection_key(&collection) else {
        return not_found();
    };
    let store = state.db.read().await;
    match store.collections.get(key).and_then(|c| c.get(&id)) {
        Some(item) => Json(item.clone()).into_response(),
        None => not_found(),
    }
}

async fn update_item(
    State(state): State<MockState>,
    Path((collection, id)): Path<(String, i64)>,
    Json(input): Json<Value>,
) -> Response {
    let Some(key) = collection_key(&collection) else {
        return not_found();
    };
    let mut store = state.db.write().await;
    let Some(item) = store.collections.get_mut(key).and_then(|c| c.get_mut(&id)) else {
        return not_found();
    };
    merge(item, input);
    item["id"] = json!(id);
    Json(item.clone()).into_response()
}

async fn delete_item(
    State(state): State<MockState>,
    Path((collection, id)): Path<(String, i64)>,
) -> Response {
    let Some(key) = collection_key(&collection) else {
        return not_found();
    };
    let mut store = state.db.write().await;
    match store.collections.get_mut(key).and_then(|c| c.remove(&id)) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => not_found(),
    }
}

/// Shallow merge of `patch` into `target`; non-object patches are ignored.
fn merge(target: &mut Value, patch: Value) {
    if let (Some(target), Value::Object(patch)) = (target.as_object_mut(), patch) {
        for (key, value) in patch {
            target.insert(key, value);
        }
    }
}
