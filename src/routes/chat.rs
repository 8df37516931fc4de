use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::services::chat_service::{ChatService, FALLBACK_REPLY};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// FAQ assistant. Upstream failures never surface as errors; the caller
/// always gets a reply body.
pub async fn ask(input: web::Json<ChatRequest>) -> impl Responder {
    let message = input.into_inner().message;
    if message.trim().is_empty() {
        return HttpResponse::BadRequest().body("Message must not be empty");
    }

    let service = match ChatService::new() {
        Ok(service) => service,
        Err(err) => {
            eprintln!("Chat service unavailable: {}", err);
            return HttpResponse::Ok().json(ChatResponse {
                reply: FALLBACK_REPLY.to_string(),
            });
        }
    };

    match service.ask(&message).await {
        Ok(reply) => HttpResponse::Ok().json(ChatResponse { reply }),
        Err(err) => {
            eprintln!("Chat completion failed: {}", err);
            HttpResponse::Ok().json(ChatResponse {
                reply: FALLBACK_REPLY.to_string(),
            })
        }
    }
}
