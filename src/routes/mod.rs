use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, with_security_headers, Config};
use crate::handlers::dev_events::DEV_EVENTS_PATH;
use crate::handlers::{
    create_dev_event, create_speaker, delete_dev_event, get_dev_event, health_check,
    list_dev_events, update_dev_event,
};
use crate::state::AppState;

fn dev_event_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_dev_events).post(create_dev_event))
        .route(
            "/:id",
            get(get_dev_event)
                .put(update_dev_event)
                .delete(delete_dev_event),
        )
        .route("/:id/speakers", post(create_speaker))
}

pub fn create_routes(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .nest(DEV_EVENTS_PATH, dev_event_routes())
        .with_state(state);

    with_security_headers(router, config.production)
        .layer(create_cors_layer(config.cors_allowed_origins.as_deref()))
        .layer(TraceLayer::new_for_http())
}
