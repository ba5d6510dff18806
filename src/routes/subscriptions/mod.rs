mod errors;
mod store;

use actix_web::{HttpResponse, http::header::ContentType, web};
use anyhow::Context;
use sqlx::PgPool;

use crate::domain::SubscriptionOutcome;

use super::helpers::render_page;
pub use errors::SubscriptionError;

#[tracing::instrument(
    name = "Handling a subscribe link",
    skip(db_pool),
    fields(subscriber_email = %path)
)]
pub async fn subscribe(
    path: web::Path<String>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, SubscriptionError> {
    let email = path.into_inner();

    let outcome = store::upsert_subscriber(&db_pool, &email)
        .await
        .context("Failed to upsert the subscriber record.")?;

    confirmation_page(outcome)
}

#[tracing::instrument(
    name = "Handling an unsubscribe link",
    skip(db_pool),
    fields(subscriber_email = %path)
)]
pub async fn unsubscribe(
    path: web::Path<String>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, SubscriptionError> {
    let email = path.into_inner();

    let outcome = store::mark_unsubscribed(&db_pool, &email)
        .await
        .context("Failed to update the subscriber record.")?;

    confirmation_page(outcome)
}

fn confirmation_page(outcome: SubscriptionOutcome) -> Result<HttpResponse, SubscriptionError> {
    let (heading, message) = confirmation_copy(outcome);

    let html = render_page(
        &[("heading", heading), ("message", message)],
        "subscription_result.html",
    )
    .context("Failed to render the confirmation page.")?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}

fn confirmation_copy(outcome: SubscriptionOutcome) -> (&'static str, &'static str) {
    match outcome {
        SubscriptionOutcome::NewSubscription => ("Success!", "Thank you for subscribing."),
        SubscriptionOutcome::Resubscribed => ("You're Back!", "Thank you for re-subscribing."),
        SubscriptionOutcome::Unsubscribed => {
            ("Unsubscribed", "You have been successfully unsubscribed.")
        }
        SubscriptionOutcome::NotSubscribed => (
            "Already Unsubscribed",
            "Your email was not found in our subscriber list.",
        ),
    }
}
