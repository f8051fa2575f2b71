mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    middleware,
    routing::{get, patch, post},
    Router,
};

use crate::api::API;
use crate::auth;
use crate::server::handlers::trips;

type DynAPI = Arc<dyn API + Send + Sync>;

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/trips", post(trips::create).get(trips::list))
        .route("/trips/:id", get(trips::find).delete(trips::delete))
        .route("/trips/:id/join", patch(trips::join))
        .layer(middleware::from_fn(auth::authenticate))
        .layer(Extension(api));

    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
