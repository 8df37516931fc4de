mod common;

use actix_web::{http::header, test};
use bson::oid::ObjectId;
use serde_json::json;
use serial_test::serial;

use common::{create_app, get_test_email, get_test_user_id};
use trailaz_api::routes::account::auth::generate_token;

fn set_test_secret() {
    std::env::set_var("JWT_SECRET", "trailaz_test_secret");
}

#[actix_rt::test]
#[serial]
async fn test_get_session_without_auth() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get().uri("/auth/session").to_request();
    let status = match test::try_call_service(&app, req).await {
        Ok(resp) => resp.status(),
        Err(err) => err.as_response_error().status_code(),
    };
    assert_eq!(status, 401);
}

#[actix_rt::test]
#[serial]
async fn test_get_profile_without_auth() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get()
        .uri(&format!("/account/{}/profile", get_test_user_id()))
        .to_request();

    let status = match test::try_call_service(&app, req).await {
        Ok(resp) => resp.status(),
        Err(err) => err.as_response_error().status_code(),
    };
    assert_eq!(status, 401);
}

#[actix_rt::test]
#[serial]
async fn test_get_trips_without_auth() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get()
        .uri(&format!("/account/{}/trips", get_test_user_id()))
        .to_request();

    let status = match test::try_call_service(&app, req).await {
        Ok(resp) => resp.status(),
        Err(err) => err.as_response_error().status_code(),
    };
    assert_eq!(status, 401);
}

#[actix_rt::test]
#[serial]
async fn test_add_trip_without_auth() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::post()
        .uri(&format!("/account/{}/trips", get_test_user_id()))
        .set_json(&json!({
            "title": "Weekend at Shahdag",
            "duration_days": 3,
            "addons": ["guide"]
        }))
        .to_request();

    let status = match test::try_call_service(&app, req).await {
        Ok(resp) => resp.status(),
        Err(err) => err.as_response_error().status_code(),
    };
    assert_eq!(status, 401);
}

#[actix_rt::test]
#[serial]
async fn test_update_trip_status_without_auth() {
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::put()
        .uri(&format!(
            "/account/{}/trips/64f000000000000000000002/status",
            get_test_user_id()
        ))
        .set_json(&json!({ "status": "Completed" }))
        .to_request();

    let status = match test::try_call_service(&app, req).await {
        Ok(resp) => resp.status(),
        Err(err) => err.as_response_error().status_code(),
    };
    assert_eq!(status, 401);
}

#[actix_rt::test]
#[serial]
async fn test_malformed_bearer_token_is_rejected() {
    set_test_secret();
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get()
        .uri(&format!("/account/{}/trips", get_test_user_id()))
        .insert_header((header::AUTHORIZATION, "Bearer not.a.token"))
        .to_request();

    let status = match test::try_call_service(&app, req).await {
        Ok(resp) => resp.status(),
        Err(err) => err.as_response_error().status_code(),
    };
    assert_eq!(status, 401);
}

#[actix_rt::test]
#[serial]
async fn test_valid_token_passes_middleware() {
    set_test_secret();
    let app = test::init_service(create_app()).await;

    let user_id = ObjectId::parse_str(get_test_user_id()).unwrap();
    let token = generate_token(&get_test_email(), user_id).unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/account/{}/trips", get_test_user_id()))
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}

#[actix_rt::test]
#[serial]
async fn test_token_signed_with_other_secret_is_rejected() {
    set_test_secret();
    let user_id = ObjectId::parse_str(get_test_user_id()).unwrap();
    let token = generate_token(&get_test_email(), user_id).unwrap();

    // Middleware now validates against a different secret.
    std::env::set_var("JWT_SECRET", "some_other_secret");
    let app = test::init_service(create_app()).await;

    let req = test::TestRequest::get()
        .uri(&format!("/account/{}/trips", get_test_user_id()))
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();

    let status = match test::try_call_service(&app, req).await {
        Ok(resp) => resp.status(),
        Err(err) => err.as_response_error().status_code(),
    };
    assert_eq!(status, 401);
}
