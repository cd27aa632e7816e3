use crate::server::app::AxumAppState;
use crate::server::graphql::{depth::DepthExceeded, GraphQLContext, Schema};
use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use juniper::http::{GraphQLBatchRequest, GraphQLRequest};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

fn depth_rejection(err: DepthExceeded) -> Response {
    warn!(depth = err.depth, max = err.max, "GraphQL query rejected");
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "data": null,
            "errors": [{ "message": err.to_string() }],
        })),
    )
        .into_response()
}

/// GraphQL POST endpoint
pub async fn graphql_handler(
    State(schema): State<Arc<Schema>>,
    Extension(state): Extension<AxumAppState>,
    Extension(context): Extension<GraphQLContext>,
    Json(request): Json<GraphQLRequest>,
) -> Response {
    if let Err(err) = state.depth_limit.check(&request.query) {
        return depth_rejection(err);
    }

    let response = request.execute(&schema, &context).await;
    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(response)).into_response()
}

/// GraphQL batch POST endpoint
///
/// The whole batch is rejected if any of its documents is too deep.
pub async fn graphql_batch_handler(
    State(schema): State<Arc<Schema>>,
    Extension(state): Extension<AxumAppState>,
    Extension(context): Extension<GraphQLContext>,
    Json(batch): Json<GraphQLBatchRequest>,
) -> Response {
    let requests = match &batch {
        GraphQLBatchRequest::Single(request) => std::slice::from_ref(request),
        GraphQLBatchRequest::Batch(requests) => requests.as_slice(),
    };
    for request in requests {
        if let Err(err) = state.depth_limit.check(&request.query) {
            return depth_rejection(err);
        }
    }

    let response = batch.execute(&schema, &context).await;
    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(response)).into_response()
}

/// GraphQL playground (GraphiQL)
pub async fn graphql_playground() -> Html<&'static str> {
    Html(
        r#"
<!DOCTYPE html>
<html>
<head>
    <title>GraphQL Playground</title>
    <style>
        body {
            height: 100%;
            margin: 0;
            width: 100%;
            overflow: hidden;
        }
        #graphiql {
            height: 100vh;
        }
    </style>
    <script
        crossorigin
        src="https://unpkg.com/react@18/umd/react.production.min.js"
    ></script>
    <script
        crossorigin
        src="https://unpkg.com/react-dom@18/umd/react-dom.production.min.js"
    ></script>
    <link rel="stylesheet" href="https://unpkg.com/graphiql/graphiql.min.css" />
</head>
<body>
    <div id="graphiql">Loading...</div>
    <script
        src="https://unpkg.com/graphiql/graphiql.min.js"
        type="application/javascript"
    ></script>
    <script>
        const fetcher = GraphiQL.createFetcher({
            url: '/graphql',
        });

        ReactDOM.render(
            React.createElement(GraphiQL, { fetcher: fetcher }),
            document.getElementById('graphiql'),
        );
    </script>
</body>
</html>
"#,
    )
}
