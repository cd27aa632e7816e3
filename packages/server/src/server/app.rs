use std::sync::Arc;

use axum::{
    extract::{Extension, Request},
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::kernel::EntityStore;
use crate::server::graphql::{create_schema, DepthLimit, GraphQLContext, Schema};
use crate::server::routes::{
    change_member_type_handler, change_post_handler, change_profile_handler, change_user_handler,
    create_post_handler, create_profile_handler, create_user_handler, delete_post_handler,
    delete_profile_handler, delete_user_handler, get_member_type_handler, get_post_handler,
    get_profile_handler, get_user_handler, graphql_batch_handler, graphql_handler,
    graphql_playground, health_handler, list_member_types_handler, list_posts_handler,
    list_profiles_handler, list_users_handler, subscribe_to_handler, unsubscribe_from_handler,
};
use crate::Config;

#[derive(Clone)]
pub struct AxumAppState {
    pub store: Arc<EntityStore>,
    pub depth_limit: DepthLimit,
}

async fn create_graphql_context(
    Extension(state): Extension<AxumAppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let context = GraphQLContext::new(state.store.clone());

    request.extensions_mut().insert(context);

    next.run(request).await
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

/// GraphQL endpoints. Only these get a per-request `GraphQLContext`.
fn graphql_routes() -> Router<Arc<Schema>> {
    let router = Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/graphql/batch", post(graphql_batch_handler));

    // GraphQL playground - only in debug builds
    #[cfg(debug_assertions)]
    let router = router.route("/graphql", get(graphql_playground));

    router.route_layer(middleware::from_fn(create_graphql_context))
}

pub fn build_app(store: Arc<EntityStore>, config: &Config) -> Router {
    let schema = Arc::new(create_schema());

    let app_state = AxumAppState {
        store,
        depth_limit: config.depth_limit(),
    };

    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/:id",
            get(get_user_handler)
                .patch(change_user_handler)
                .delete(delete_user_handler),
        )
        .route("/users/:id/subscribeTo", post(subscribe_to_handler))
        .route("/users/:id/unsubscribeFrom", post(unsubscribe_from_handler))
        .route(
            "/profiles",
            get(list_profiles_handler).post(create_profile_handler),
        )
        .route(
            "/profiles/:id",
            get(get_profile_handler)
                .patch(change_profile_handler)
                .delete(delete_profile_handler),
        )
        .route("/posts", get(list_posts_handler).post(create_post_handler))
        .route(
            "/posts/:id",
            get(get_post_handler)
                .patch(change_post_handler)
                .delete(delete_post_handler),
        )
        .route("/member-types", get(list_member_types_handler))
        .route(
            "/member-types/:id",
            get(get_member_type_handler).patch(change_member_type_handler),
        )
        .route("/health", get(health_handler))
        .merge(graphql_routes())
        .layer(Extension(app_state)) // Add shared state (must be after middlewares that need it)
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}
