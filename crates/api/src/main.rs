#[tokio::main]
async fn main() {
    velogo_observability::init();

    let state = velogo_api::app::bootstrap();
    let app = velogo_api::app::build_app(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
