use super::{
    handlers::{auth, health, ofertas},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Auth
        .route("/auth-register", post(auth::register))
        .route("/auth-login", post(auth::login))
        // Offers CRUD + paginated listing
        .route(
            "/ofertas-viagem",
            get(ofertas::list_ofertas)
                .post(ofertas::create_oferta)
                .put(ofertas::update_oferta),
        )
        .route(
            "/ofertas-viagem/{id}",
            get(ofertas::get_oferta).delete(ofertas::delete_oferta),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
