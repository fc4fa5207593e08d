//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use dioxus::logger::tracing;
        use dioxus::server::axum;

        Ok(dioxus::server::router(App)
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    tracing::debug!("request: {} {}", request.method(), request.uri());
                    let res = next.run(request).await;
                    tracing::debug!("response: {}", res.status());
                    res
                },
            )))
    });
}
