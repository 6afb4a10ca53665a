#[cfg(test)]
mod tests {
    use crate::helpers::{TestApp, make_test_app, send};
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use serial_test::serial;

    async fn create(app: &TestApp, body: Value) -> (StatusCode, Value) {
        send(app, "POST", "/api/workshops", Some(&app.admin_token()), Some(body)).await
    }

    fn vip_body(name: &str, cap: i32) -> Value {
        json!({
            "name": name,
            "starts_at": "2025-11-03T09:00:00Z",
            "is_vip": true,
            "max_capacity": cap
        })
    }

    #[tokio::test]
    #[serial]
    async fn admin_creates_workshop() {
        let app = make_test_app().await;

        let (status, json) = create(
            &app,
            json!({
                "name": "Keynote",
                "location": "Main Hall",
                "starts_at": "2025-11-03T09:00:00Z",
                "max_capacity": 50
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Workshop created");
        assert_eq!(json["data"]["name"], "Keynote");
        assert_eq!(json["data"]["is_vip"], false);
        assert_eq!(json["data"]["max_capacity"], Value::Null);
        assert_eq!(json["data"]["owner_id"], app.admin.id);
    }

    #[tokio::test]
    #[serial]
    async fn scanner_cannot_create_workshop() {
        let app = make_test_app().await;

        let (status, json) = send(
            &app,
            "POST",
            "/api/workshops",
            Some(&app.scanner_token()),
            Some(json!({ "name": "Nope", "starts_at": "2025-11-03T09:00:00Z" })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    #[serial]
    async fn vip_capacity_is_validated() {
        let app = make_test_app().await;

        let (status, _) = create(
            &app,
            json!({ "name": "Lounge", "starts_at": "2025-11-03T09:00:00Z", "is_vip": true }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, json) = create(&app, vip_body("Lounge", 32)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "VIP workshops need a capacity between 1 and 31");

        let (status, _) = create(&app, json!({ "name": "", "starts_at": "2025-11-03T09:00:00Z" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, json) = create(&app, vip_body("Lounge", 31)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["max_capacity"], 31);
    }

    #[tokio::test]
    #[serial]
    async fn scanner_lists_every_workshop() {
        let app = make_test_app().await;
        create(&app, vip_body("Lounge", 3)).await;
        create(&app, json!({ "name": "Keynote", "starts_at": "2025-11-03T08:00:00Z" })).await;

        let (status, json) = send(&app, "GET", "/api/workshops", Some(&app.scanner_token()), None).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<_> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|w| w["name"].as_str().unwrap().to_owned())
            .collect();
        assert_eq!(names, vec!["Keynote", "Lounge"]);
    }

    #[tokio::test]
    #[serial]
    async fn null_clears_optional_text_but_missing_keeps_it() {
        let app = make_test_app().await;
        let token = app.admin_token();
        let body = json!({
            "name": "Keynote",
            "description": "Welcome talk",
            "location": "Main Hall",
            "starts_at": "2025-11-03T09:00:00Z"
        });
        let (_, created) = create(&app, body).await;
        let uri = format!("/api/workshops/{}", created["data"]["id"].as_i64().unwrap());

        let (status, json) = send(&app, "PUT", &uri, Some(&token), Some(json!({ "location": null }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["location"], Value::Null);
        assert_eq!(json["data"]["description"], "Welcome talk");

        let (status, json) = send(&app, "PUT", &uri, Some(&token), Some(json!({ "name": "Opening Keynote" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["description"], "Welcome talk");
        assert_eq!(json["data"]["location"], Value::Null);
    }

    #[tokio::test]
    #[serial]
    async fn update_and_delete_workshop() {
        let app = make_test_app().await;
        let token = app.admin_token();
        let (_, created) = create(&app, vip_body("Lounge", 3)).await;
        let id = created["data"]["id"].as_i64().unwrap();
        let uri = format!("/api/workshops/{id}");

        let (status, json) = send(&app, "PUT", &uri, Some(&token), Some(json!({ "is_vip": false }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["is_vip"], false);
        assert_eq!(json["data"]["max_capacity"], Value::Null);

        let (status, _) = send(&app, "PUT", &uri, Some(&token), Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "DELETE", &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, json) = send(&app, "GET", &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Session not found");
    }

    #[tokio::test]
    #[serial]
    async fn vip_grants_over_http() {
        let app = make_test_app().await;
        let token = app.admin_token();
        let (_, w) = create(&app, vip_body("Backstage", 1)).await;
        let wid = w["data"]["id"].as_i64().unwrap();

        let mut guest_ids = Vec::new();
        for (name, email) in [("Xena", "x@example.com"), ("Yuri", "y@example.com")] {
            let (_, g) = send(
                &app,
                "POST",
                "/api/guests",
                Some(&token),
                Some(json!({ "name": name, "email": email })),
            )
            .await;
            guest_ids.push(g["data"]["id"].as_i64().unwrap());
        }
        let vip_uri = format!("/api/workshops/{wid}/vip");

        let (status, json) = send(&app, "POST", &vip_uri, Some(&token), Some(json!({ "guest_id": guest_ids[0] }))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["newly_granted"], true);

        let (status, json) = send(&app, "POST", &vip_uri, Some(&token), Some(json!({ "guest_id": guest_ids[0] }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["newly_granted"], false);

        let (status, _) = send(&app, "POST", &vip_uri, Some(&token), Some(json!({ "guest_id": guest_ids[1] }))).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, json) = send(&app, "GET", &vip_uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().unwrap().len(), 1);

        let revoke_uri = format!("/api/workshops/{wid}/vip/{}", guest_ids[0]);
        let (status, json) = send(&app, "DELETE", &revoke_uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["revoked"], true);
        let (_, json) = send(&app, "DELETE", &revoke_uri, Some(&token), None).await;
        assert_eq!(json["data"]["revoked"], false);
    }

    #[tokio::test]
    #[serial]
    async fn grant_on_open_workshop_is_bad_request() {
        let app = make_test_app().await;
        let token = app.admin_token();
        let (_, w) = create(&app, json!({ "name": "Keynote", "starts_at": "2025-11-03T09:00:00Z" })).await;
        let (_, g) = send(
            &app,
            "POST",
            "/api/guests",
            Some(&token),
            Some(json!({ "name": "Ada", "email": "ada@example.com" })),
        )
        .await;

        let uri = format!("/api/workshops/{}/vip", w["data"]["id"]);
        let (status, json) = send(&app, "POST", &uri, Some(&token), Some(json!({ "guest_id": g["data"]["id"] }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Session is not a VIP session");
    }
}
