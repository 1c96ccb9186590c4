use axum::http::{header, HeaderValue};
use tower::ServiceBuilder;
use tower_http::{
    services::ServeDir,
    set_header::{SetResponseHeader, SetResponseHeaderLayer},
};

pub const ASSET_CACHE_CONTROL: &str = "public, max-age=86400";

/// Serves the gallery images under `<site_root>/assets` with a cache header.
pub fn assets_service(site_root: &str) -> SetResponseHeader<ServeDir, HeaderValue> {
    ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static(ASSET_CACHE_CONTROL),
        ))
        .service(ServeDir::new(format!("{site_root}/assets")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_assets_served_with_cache_header() {
        let service = assets_service(concat!(env!("CARGO_MANIFEST_DIR"), "/public"));
        let request = Request::builder()
            .uri("/.gitkeep")
            .body(Body::empty())
            .unwrap();

        let response = service.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            ASSET_CACHE_CONTROL
        );
    }

    #[tokio::test]
    async fn test_missing_asset_is_not_found() {
        let service = assets_service(concat!(env!("CARGO_MANIFEST_DIR"), "/public"));
        let request = Request::builder()
            .uri("/nope.png")
            .body(Body::empty())
            .unwrap();

        let response = service.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
