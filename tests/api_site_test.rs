//! Integration tests for the site admin API

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::test_utils::{body_to_string, create_site, test_app};

    /// Tests website creation assigns an id and stores the plan
    #[tokio::test]
    async fn it_creates_a_website() {
        let app = test_app().await;
        let site = create_site(&app, "Acme Store", "free").await;

        assert!(!site.id.is_empty());
        assert_eq!(site.name, "Acme Store");
        assert_eq!(site.plan.as_str(), "free");
    }

    /// Tests a free plan list over the limit is rejected
    #[tokio::test]
    async fn it_rejects_oversized_free_lists() {
        let app = test_app().await;
        let site = create_site(&app, "Acme Store", "free").await;

        let notifications: Vec<serde_json::Value> = (0..6)
            .map(|i| serde_json::json!({"id": format!("n{}", i), "title": "Sale"}))
            .collect();

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/site/{}/notifications", site.id))
                    .method("PUT")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({"notifications": notifications}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    /// Tests free plan click-through urls are stripped at write time
    #[tokio::test]
    async fn it_strips_urls_for_free_plan() {
        let app = test_app().await;
        let site = create_site(&app, "Acme Store", "free").await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/site/{}/notifications", site.id))
                    .method("PUT")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "notifications": [
                                {"id": "n1", "title": "Sale", "url": "https://example.com/sale"}
                            ]
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/embed/{}", site.id))
                    .method("GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = body_to_string(response.into_body()).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(json["notifications"][0].get("url").is_none());
    }

    /// Tests free plan themes are pinned to ios at write time
    #[tokio::test]
    async fn it_forces_ios_theme_for_free_plan() {
        let app = test_app().await;
        let site = create_site(&app, "Acme Store", "free").await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/site/{}/config", site.id))
                    .method("PUT")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({"theme": "glass"}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/embed/{}", site.id))
                    .method("GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = body_to_string(response.into_body()).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["config"]["theme"], "ios");
    }

    /// Tests pro plan keeps urls and themes as supplied
    #[tokio::test]
    async fn it_keeps_pro_plan_urls_and_theme() {
        let app = test_app().await;
        let site = create_site(&app, "Acme Store", "pro").await;

        let _response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/site/{}/notifications", site.id))
                    .method("PUT")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "notifications": [
                                {"id": "n1", "title": "Sale", "url": "https://example.com/sale"}
                            ]
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        let _response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/site/{}/config", site.id))
                    .method("PUT")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({"theme": "glass"}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/embed/{}", site.id))
                    .method("GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = body_to_string(response.into_body()).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            json["notifications"][0]["url"],
            "https://example.com/sale"
        );
        assert_eq!(json["config"]["theme"], "glass");
    }

    /// Tests a second save replaces the whole list
    #[tokio::test]
    async fn it_replaces_the_entire_list() {
        let app = test_app().await;
        let site = create_site(&app, "Acme Store", "pro").await;

        for payload in [
            serde_json::json!({
                "notifications": [
                    {"id": "n1", "title": "First"},
                    {"id": "n2", "title": "Second"}
                ]
            }),
            serde_json::json!({
                "notifications": [
                    {"id": "n3", "title": "Third"}
                ]
            }),
        ] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .uri(format!("/api/site/{}/notifications", site.id))
                        .method("PUT")
                        .header("content-type", "application/json")
                        .body(Body::from(payload.to_string()))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/embed/{}", site.id))
                    .method("GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = body_to_string(response.into_body()).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let items = json["notifications"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], "n3");
    }

    /// Tests items saved without an id get one assigned
    #[tokio::test]
    async fn it_assigns_ids_when_missing() {
        let app = test_app().await;
        let site = create_site(&app, "Acme Store", "pro").await;

        let _response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/site/{}/notifications", site.id))
                    .method("PUT")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "notifications": [{"title": "Sale"}]
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/embed/{}", site.id))
                    .method("GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = body_to_string(response.into_body()).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(!json["notifications"][0]["id"].as_str().unwrap().is_empty());
    }

    /// Tests saving against an unknown website returns 404
    #[tokio::test]
    async fn it_returns_404_for_unknown_website() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/site/nope/notifications")
                    .method("PUT")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({"notifications": []}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
