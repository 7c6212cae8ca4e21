#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

use common::{TEACHER, context, query};
use noticeboard_core::domain::NewAnnouncement;
use noticeboard_core::ports::AnnouncementRepository;

fn stored(title: &str, start: Option<&str>, expiration: &str) -> NewAnnouncement {
    NewAnnouncement {
        title: title.to_string(),
        message: format!("{title} message"),
        start_date: start.map(str::to_string),
        expiration_date: expiration.to_string(),
        created_by: TEACHER.to_string(),
        created_at: "2026-10-01T09:00:00.000000".to_string(),
    }
}

fn titles(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect()
}

#[actix_rt::test]
async fn test_active_listing_hides_expired_and_scheduled() {
    let ctx = context();
    ctx.announcements
        .insert(stored("Current", Some("2026-10-01T00:00:00"), "2026-11-01T00:00:00"))
        .await
        .unwrap();
    ctx.announcements
        .insert(stored("Expired", None, "2026-10-18T00:00:00"))
        .await
        .unwrap();
    ctx.announcements
        .insert(stored("Scheduled", Some("2026-10-25T00:00:00"), "2026-11-01T00:00:00"))
        .await
        .unwrap();
    let app = test_app!(ctx.state.clone());

    let req = test::TestRequest::get().uri("/announcements").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(titles(&body), vec!["Current"]);

    let req = test::TestRequest::get()
        .uri(&format!("/announcements/all?teacher_username={TEACHER}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(titles(&body), vec!["Current", "Expired", "Scheduled"]);

    // Turning the filter off needs no teacher.
    let req = test::TestRequest::get()
        .uri("/announcements/?active_only=false")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[actix_rt::test]
async fn test_active_only_flag_spellings() {
    let ctx = context();
    ctx.announcements
        .insert(stored("Expired", None, "2026-10-18T00:00:00"))
        .await
        .unwrap();
    let app = test_app!(ctx.state.clone());

    let cases = [
        ("false", 1),
        ("False", 1),
        ("0", 1),
        ("no", 1),
        ("OFF", 1),
        ("true", 0),
        ("True", 0),
        ("1", 0),
        ("yes", 0),
        ("on", 0),
    ];

    for (flag, expected) in cases {
        let req = test::TestRequest::get()
            .uri(&format!("/announcements?active_only={flag}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "active_only={flag}");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body.as_array().unwrap().len(), expected, "active_only={flag}");
    }

    let req = test::TestRequest::get()
        .uri("/announcements?active_only=maybe")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_list_all_requires_known_teacher() {
    let ctx = context();
    let app = test_app!(ctx.state.clone());

    let req = test::TestRequest::get()
        .uri("/announcements/all?teacher_username=nobody")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Authentication required");
}

#[actix_rt::test]
async fn test_create_requires_future_expiration() {
    let ctx = context();
    let app = test_app!(ctx.state.clone());

    let past = query(&[
        ("title", "Late notice"),
        ("message", "Too late"),
        ("expiration_date", "2026-10-19T11:59:59"),
        ("teacher_username", TEACHER),
    ]);
    let req = test::TestRequest::post()
        .uri(&format!("/announcements?{past}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Expiration date must be in the future");

    let future = query(&[
        ("title", "Spring concert"),
        ("message", "Auditorium at 7pm"),
        ("expiration_date", "2026-10-19T13:00:00"),
        ("teacher_username", TEACHER),
    ]);
    let req = test::TestRequest::post()
        .uri(&format!("/announcements?{future}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert!(uuid::Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
    assert_eq!(body["title"], "Spring concert");
    assert_eq!(body["message"], "Auditorium at 7pm");
    assert!(body["start_date"].is_null());
    assert_eq!(body["expiration_date"], "2026-10-19T13:00:00");
    assert_eq!(body["created_by"], TEACHER);
    assert_eq!(body["created_at"], "2026-10-19T12:00:00.000000");

    assert_eq!(ctx.announcements.find_all().await.unwrap().len(), 1);
}

#[actix_rt::test]
async fn test_create_rejects_unparseable_dates() {
    let ctx = context();
    let app = test_app!(ctx.state.clone());

    let cases = [
        ("tomorrow", None, "Invalid expiration date format"),
        (
            "2026-11-01T00:00:00",
            Some("after lunch"),
            "Invalid start date format",
        ),
    ];

    for (expiration, start, detail) in cases {
        let mut pairs = vec![
            ("title", "Club fair"),
            ("message", "Gym"),
            ("expiration_date", expiration),
            ("teacher_username", TEACHER),
        ];
        if let Some(start) = start {
            pairs.push(("start_date", start));
        }

        let req = test::TestRequest::post()
            .uri(&format!("/announcements?{}", query(&pairs)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], detail);
    }

    assert!(ctx.announcements.find_all().await.unwrap().is_empty());
}

#[actix_rt::test]
async fn test_unknown_teacher_cannot_mutate() {
    let ctx = context();
    let existing = ctx
        .announcements
        .insert(stored("Original", None, "2026-11-01T00:00:00"))
        .await
        .unwrap();
    let app = test_app!(ctx.state.clone());

    let fields = query(&[
        ("title", "Hijacked"),
        ("message", "Nope"),
        ("expiration_date", "2026-12-01T00:00:00"),
        ("teacher_username", "nobody"),
    ]);

    let requests = [
        test::TestRequest::post()
            .uri(&format!("/announcements?{fields}"))
            .to_request(),
        test::TestRequest::put()
            .uri(&format!("/announcements/{}?{fields}", existing.id))
            .to_request(),
        test::TestRequest::delete()
            .uri(&format!(
                "/announcements/{}?teacher_username=nobody",
                existing.id
            ))
            .to_request(),
    ];

    for req in requests {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    let all = ctx.announcements.find_all().await.unwrap();
    assert_eq!(all, vec![existing]);
}

#[actix_rt::test]
async fn test_identity_is_checked_before_id_format() {
    let ctx = context();
    let app = test_app!(ctx.state.clone());

    let req = test::TestRequest::delete()
        .uri("/announcements/not-an-id?teacher_username=nobody")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_malformed_and_missing_ids() {
    let ctx = context();
    let app = test_app!(ctx.state.clone());
    let missing = uuid::Uuid::new_v4();

    let fields = query(&[
        ("title", "Whatever"),
        ("message", "Whatever"),
        ("expiration_date", "2026-12-01T00:00:00"),
        ("teacher_username", TEACHER),
    ]);

    let cases = [
        (
            test::TestRequest::put()
                .uri(&format!("/announcements/12345?{fields}"))
                .to_request(),
            StatusCode::BAD_REQUEST,
            "Invalid announcement ID",
        ),
        (
            test::TestRequest::delete()
                .uri(&format!("/announcements/12345?teacher_username={TEACHER}"))
                .to_request(),
            StatusCode::BAD_REQUEST,
            "Invalid announcement ID",
        ),
        (
            test::TestRequest::put()
                .uri(&format!("/announcements/{missing}?{fields}"))
                .to_request(),
            StatusCode::NOT_FOUND,
            "Announcement not found",
        ),
        (
            test::TestRequest::delete()
                .uri(&format!(
                    "/announcements/{missing}?teacher_username={TEACHER}"
                ))
                .to_request(),
            StatusCode::NOT_FOUND,
            "Announcement not found",
        ),
    ];

    for (req, status, detail) in cases {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), status);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], detail);
    }
}

#[actix_rt::test]
async fn test_create_update_round_trip() {
    let ctx = context();
    let app = test_app!(ctx.state.clone());

    let create = query(&[
        ("title", "Science fair"),
        ("message", "Projects due Friday"),
        ("expiration_date", "2026-11-15T17:00:00"),
        ("start_date", "2026-10-19T08:00:00"),
        ("teacher_username", TEACHER),
    ]);
    let req = test::TestRequest::post()
        .uri(&format!("/announcements?{create}"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().unwrap().to_string();

    let list_all = format!("/announcements/all?teacher_username={TEACHER}");
    let req = test::TestRequest::get().uri(&list_all).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Science fair");

    // Update does not insist on a future expiration.
    let update = query(&[
        ("title", "Science fair (closed)"),
        ("message", "Thanks for participating"),
        ("expiration_date", "2026-10-01T00:00:00"),
        ("teacher_username", TEACHER),
    ]);
    let req = test::TestRequest::put()
        .uri(&format!("/announcements/{id}?{update}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["title"], "Science fair (closed)");
    assert!(updated["start_date"].is_null());
    assert_eq!(updated["created_at"], created["created_at"]);

    let req = test::TestRequest::get().uri(&list_all).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body[0]["title"], "Science fair (closed)");
    assert_eq!(body[0]["message"], "Thanks for participating");
    assert_eq!(body[0]["expiration_date"], "2026-10-01T00:00:00");

    // Now expired, so gone from the public list.
    let req = test::TestRequest::get().uri("/announcements").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_update_rejects_unparseable_expiration() {
    let ctx = context();
    let existing = ctx
        .announcements
        .insert(stored("Original", None, "2026-11-01T00:00:00"))
        .await
        .unwrap();
    let app = test_app!(ctx.state.clone());

    let fields = query(&[
        ("title", "Edited"),
        ("message", "Edited"),
        ("expiration_date", "end of term"),
        ("teacher_username", TEACHER),
    ]);
    let req = test::TestRequest::put()
        .uri(&format!("/announcements/{}?{fields}", existing.id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let unchanged = ctx.announcements.find_by_id(existing.id).await.unwrap();
    assert_eq!(unchanged, Some(existing));
}

#[actix_rt::test]
async fn test_delete_removes_announcement() {
    let ctx = context();
    let existing = ctx
        .announcements
        .insert(stored("Picture day", None, "2026-11-01T00:00:00"))
        .await
        .unwrap();
    let app = test_app!(ctx.state.clone());

    let req = test::TestRequest::delete()
        .uri(&format!(
            "/announcements/{}?teacher_username={TEACHER}",
            existing.id
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Announcement deleted successfully");

    assert!(ctx.announcements.find_all().await.unwrap().is_empty());
}

#[actix_rt::test]
async fn test_missing_parameters_are_bad_requests() {
    let ctx = context();
    let app = test_app!(ctx.state.clone());

    let req = test::TestRequest::post()
        .uri("/announcements?title=Untitled")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/announcements/all").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_request_id_is_echoed() {
    let ctx = context();
    let app = test_app!(ctx.state.clone());

    let req = test::TestRequest::get()
        .uri("/announcements")
        .insert_header(("x-request-id", "trace-me"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "trace-me");

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().contains_key("x-request-id"));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "in-memory");
}
