#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, send};
    use axum::http::StatusCode;
    use serde_json::json;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn empty_dashboard_is_all_zero() {
        let app = make_test_app().await;

        let (status, json) = send(&app, "GET", "/api/dashboard", Some(&app.admin_token()), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["total_workshops"], 0);
        assert_eq!(json["data"]["total_guests"], 0);
        assert_eq!(json["data"]["average_attendance_percentage"], 0.0);
    }

    #[tokio::test]
    #[serial]
    async fn dashboard_counts_owned_records() {
        let app = make_test_app().await;
        let token = app.admin_token();

        let (_, w) = send(
            &app,
            "POST",
            "/api/workshops",
            Some(&token),
            Some(json!({ "name": "A", "starts_at": "2025-11-03T09:00:00Z" })),
        )
        .await;
        send(
            &app,
            "POST",
            "/api/workshops",
            Some(&token),
            Some(json!({ "name": "V", "starts_at": "2025-11-03T10:00:00Z", "is_vip": true, "max_capacity": 5 })),
        )
        .await;
        let (_, g) = send(
            &app,
            "POST",
            "/api/guests",
            Some(&token),
            Some(json!({ "name": "Ada", "email": "ada@example.com" })),
        )
        .await;
        send(
            &app,
            "POST",
            "/api/check-ins",
            Some(&token),
            Some(json!({ "guest_token": g["data"]["qr_code"], "workshop_id": w["data"]["id"] })),
        )
        .await;

        let (status, json) = send(&app, "GET", "/api/dashboard", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["total_workshops"], 2);
        assert_eq!(json["data"]["vip_workshops"], 1);
        assert_eq!(json["data"]["total_guests"], 1);
        assert_eq!(json["data"]["total_check_ins"], 1);
        assert_eq!(json["data"]["average_attendance_percentage"], 50.0);
        assert_eq!(json["data"]["eligible_guests"], 0);
    }
}
