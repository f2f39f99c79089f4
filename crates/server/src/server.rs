use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, patch, post},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Basic},
};

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    ServerError, auth as auth_handlers, containers, financials, fleet, inventory, reports,
    shipments,
};
use engine::{Engine, User};

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<RwLock<Engine>>,
}

/// Basic-auth middleware: credentials are resolved against the user
/// collection on every request and the matching user becomes a request
/// extension.
async fn auth(
    auth_header: TypedHeader<Authorization<Basic>>,
    State(state): State<ServerState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if auth_header.username().is_empty() || auth_header.password().is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let user = state
        .engine
        .read()
        .await
        .authenticate(auth_header.username(), auth_header.password())
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Guard for admin-only handlers.
pub fn require_admin(user: &User) -> Result<(), ServerError> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(ServerError::Forbidden)
    }
}

async fn health() -> &'static str {
    "ok"
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/shipments", post(shipments::create).get(shipments::list))
        .route("/shipments/mine", get(shipments::mine))
        .route("/shipments/{id}/status", patch(shipments::update_status))
        .route("/containers", get(containers::list))
        .route("/containers/optimize", post(containers::optimize))
        .route("/containers/{id}", get(containers::detail))
        .route("/fleet", get(fleet::list))
        .route("/fleet/expense", post(fleet::expense_new))
        .route("/fleet/{id}", get(fleet::detail))
        .route("/inventory", get(inventory::list))
        .route("/inventory/{category}", get(inventory::by_category))
        .route("/inventory/{category}/restock", post(inventory::restock))
        .route("/financials/summary", get(financials::summary))
        .route("/financials/recalculate", post(financials::recalculate))
        .route("/reports", get(reports::generate))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth))
        .route("/", get(health))
        .route("/auth/register", post(auth_handlers::register))
        .route("/shipments/track/{id}", get(shipments::track))
        .with_state(state)
}

pub async fn run(engine: Engine) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(RwLock::new(engine)),
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, header};
    use base64::Engine as _;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use engine::{NewUser, Role};

    fn test_engine(name: &str) -> Engine {
        let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../target/test_dbs");
        std::fs::create_dir_all(&root).unwrap();
        let path = root.join(format!(
            "server_{name}_{}_{}.json",
            std::process::id(),
            unique_nanos()
        ));
        Engine::builder().path(path).build().unwrap()
    }

    fn unique_nanos() -> u128 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default()
    }

    fn router_with_users(name: &str) -> Router {
        let mut engine = test_engine(name);
        engine
            .register_user(NewUser {
                username: "boss".to_string(),
                email: "boss@example.com".to_string(),
                password: "secret1".to_string(),
                role: Role::Admin,
            })
            .unwrap();
        engine
            .register_user(NewUser {
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                password: "secret1".to_string(),
                role: Role::Customer,
            })
            .unwrap();

        router(ServerState {
            engine: Arc::new(RwLock::new(engine)),
        })
    }

    fn basic(username: &str, password: &str) -> String {
        let encoded = base64::engine::general_purpose::STANDARD
            .encode(format!("{username}:{password}"));
        format!("Basic {encoded}")
    }

    fn get(uri: &str, credentials: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(credentials) = credentials {
            builder = builder.header(header::AUTHORIZATION, credentials);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, credentials: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(credentials) = credentials {
            builder = builder.header(header::AUTHORIZATION, credentials);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_needs_no_credentials() {
        let app = router_with_users("health");
        let response = app.oneshot(get("/", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn wrong_credentials_are_rejected() {
        let app = router_with_users("badauth");
        let response = app
            .clone()
            .oneshot(get("/shipments/mine", Some(&basic("alice", "wrong"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app.oneshot(get("/shipments/mine", None)).await.unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn registration_can_bootstrap_an_admin() {
        // Fresh deployment: no users in the seed, so the first admin has to
        // come through the register endpoint.
        let app = router(ServerState {
            engine: Arc::new(RwLock::new(test_engine("bootstrap"))),
        });

        let payload = json!({
            "username": "boss",
            "email": "boss@example.com",
            "password": "secret1",
            "role": "Admin",
        });
        let response = app
            .clone()
            .oneshot(post_json("/auth/register", None, payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let user = body_json(response).await;
        assert_eq!(user["role"], json!("Admin"));

        let response = app
            .clone()
            .oneshot(get("/reports", Some(&basic("boss", "secret1"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // A body without a role stays a customer.
        let payload = json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "secret1",
        });
        let response = app
            .oneshot(post_json("/auth/register", None, payload))
            .await
            .unwrap();
        let user = body_json(response).await;
        assert_eq!(user["role"], json!("Customer"));
    }

    #[tokio::test]
    async fn unknown_service_class_is_rejected() {
        let app = router_with_users("bad_class");
        let payload = json!({
            "product_name": "Blueberries",
            "category": "Fresh",
            "weight": 500.0,
            "destination": "Berlin, Germany",
            "service_class": "ExtraLarge",
        });

        let response = app
            .oneshot(post_json("/shipments", Some(&basic("alice", "secret1")), payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn registration_conflicts_on_taken_username() {
        let app = router_with_users("register");
        let payload = json!({
            "username": "alice",
            "email": "new@example.com",
            "password": "secret1",
        });
        let response = app
            .oneshot(post_json("/auth/register", None, payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn customers_cannot_reach_admin_routes() {
        let app = router_with_users("forbidden");
        let credentials = basic("alice", "secret1");
        for uri in ["/containers", "/fleet", "/inventory", "/reports", "/shipments"] {
            let response = app
                .clone()
                .oneshot(get(uri, Some(&credentials)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::FORBIDDEN, "{uri}");
        }
    }

    #[tokio::test]
    async fn booking_and_tracking_round_trip() {
        let app = router_with_users("booking");
        let payload = json!({
            "product_name": "Blueberries",
            "category": "Fresh",
            "weight": 500.0,
            "destination": "Berlin, Germany",
            "service_class": "Medium",
        });

        let response = app
            .clone()
            .oneshot(post_json("/shipments", Some(&basic("alice", "secret1")), payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let shipment = body_json(response).await;
        assert_eq!(shipment["price"], json!(24000.0));
        assert_eq!(shipment["status"], json!("Pending"));

        // Tracking is public.
        let response = app
            .clone()
            .oneshot(get("/shipments/track/1", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let info = body_json(response).await;
        assert_eq!(info["current_location"], json!("Muğla Warehouse"));

        let response = app
            .oneshot(get("/shipments/mine", Some(&basic("alice", "secret1"))))
            .await
            .unwrap();
        let mine = body_json(response).await;
        assert_eq!(mine.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn overweight_booking_maps_to_422() {
        let app = router_with_users("overweight");
        let payload = json!({
            "product_name": "Blueberries",
            "category": "Fresh",
            "weight": 2500.0,
            "destination": "Berlin, Germany",
            "service_class": "Small",
        });

        let response = app
            .oneshot(post_json("/shipments", Some(&basic("alice", "secret1")), payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn optimize_without_pending_shipments_maps_to_422() {
        let app = router_with_users("optimize");
        let response = app
            .oneshot(post_json(
                "/containers/optimize",
                Some(&basic("boss", "secret1")),
                json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("no pending"));
    }

    #[tokio::test]
    async fn admin_sees_the_yard_and_the_fleet() {
        let app = router_with_users("admin_views");
        let credentials = basic("boss", "secret1");

        let response = app
            .clone()
            .oneshot(get("/containers", Some(&credentials)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let yard = body_json(response).await;
        assert_eq!(yard["stats"]["total"], json!(6));

        let response = app
            .clone()
            .oneshot(get("/fleet", Some(&credentials)))
            .await
            .unwrap();
        let fleet = body_json(response).await;
        assert_eq!(fleet["stats"]["ships"], json!(2));
        assert_eq!(fleet["stats"]["trucks"], json!(2));

        let response = app
            .oneshot(get("/containers/99", Some(&credentials)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_inventory_category_maps_to_400() {
        let app = router_with_users("bad_category");
        let response = app
            .oneshot(get("/inventory/stale", Some(&basic("boss", "secret1"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn restock_accepts_lowercase_category() {
        let app = router_with_users("restock");
        let response = app
            .oneshot(post_json(
                "/inventory/frozen/restock",
                Some(&basic("boss", "secret1")),
                json!({ "quantity": 500.0 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let item = body_json(response).await;
        assert_eq!(item["quantity"], json!(10500.0));
    }

    #[tokio::test]
    async fn financial_summary_and_report_agree() {
        let app = router_with_users("financials");
        let credentials = basic("boss", "secret1");

        let response = app
            .clone()
            .oneshot(get("/financials/summary", Some(&credentials)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let summary = body_json(response).await;
        assert_eq!(summary["total_revenue"], json!(0.0));

        let response = app
            .oneshot(get("/reports", Some(&credentials)))
            .await
            .unwrap();
        let report = body_json(response).await;
        assert_eq!(report["financials"]["total_revenue"], json!(0.0));
        assert_eq!(report["fleet"]["total"], json!(4));
    }
}
