use super::store;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::model::email_config::EmailConfig;
use log::{error, info};

/// Actix web handler for `POST /uploadEmailConfig`.
///
/// # Returns
/// - `200 OK` with a short confirmation naming the stored record.
/// - `503 Service Unavailable` if the database cannot be written.
pub async fn process(state: web::Data<AppState>, payload: web::Json<EmailConfig>) -> impl Responder {
    let database_path = state.database_path.clone();
    let config = payload.into_inner();

    let result = web::block(move || {
        let conn = store::open(&database_path)?;
        store::insert(&conn, &config)
    })
    .await;

    match result {
        Ok(Ok(id)) => {
            info!("Saved email configuration {}", id);
            HttpResponse::Ok().body(format!("Configuration {} saved", id))
        }
        Ok(Err(e)) => {
            error!("Error saving configuration: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error saving configuration: {}", e))
        }
        Err(e) => {
            error!("Error saving configuration: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error saving configuration: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::services;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    fn state_in(dir: &std::path::Path) -> AppState {
        AppState::load(&ServerConfig {
            data_dir: dir.to_path_buf(),
            ..ServerConfig::default()
        })
        .unwrap()
    }

    #[actix_web::test]
    async fn stores_the_posted_config() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path());
        let app = test::init_service(App::new().configure(|cfg| services::configure(cfg, &state))).await;

        let req = test::TestRequest::post()
            .uri("/uploadEmailConfig")
            .set_json(serde_json::json!({
                "title": "Hi",
                "content": "<b>Body</b>",
                "imageUrl": "http://x/y.png"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let conn = store::open(&state.database_path).unwrap();
        assert_eq!(
            store::latest(&conn).unwrap(),
            Some(EmailConfig {
                title: "Hi".into(),
                content: "<b>Body</b>".into(),
                image_url: "http://x/y.png".into(),
            })
        );
    }

    #[actix_web::test]
    async fn rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path());
        let app = test::init_service(App::new().configure(|cfg| services::configure(cfg, &state))).await;

        let req = test::TestRequest::post()
            .uri("/uploadEmailConfig")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"title\": 1}")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }

    #[actix_web::test]
    async fn unwritable_database_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        // a directory cannot be opened as a database file
        state.database_path = dir.path().to_path_buf();
        let app = test::init_service(App::new().configure(|cfg| services::configure(cfg, &state))).await;

        let req = test::TestRequest::post()
            .uri("/uploadEmailConfig")
            .set_json(EmailConfig::default())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
