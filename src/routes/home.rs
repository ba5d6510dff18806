use actix_web::{HttpResponse, Responder, http::header::ContentType};

pub async fn home() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("Subscription management service is running.")
}
