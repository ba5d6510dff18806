use sqlx::{PgPool, types::chrono::Utc};
use uuid::Uuid;

use crate::domain::SubscriptionOutcome;

/// Create the record, or flip an existing one back to subscribed.
///
/// The unique constraint on `email` plus `ON CONFLICT` make this a single
/// atomic statement, so two concurrent first-time subscribes for the same
/// email serialize inside Postgres instead of racing a read-then-write.
/// `xmax = 0` distinguishes a freshly inserted row from an updated one.
#[tracing::instrument(name = "Upserting subscriber record", skip(pool))]
pub async fn upsert_subscriber(
    pool: &PgPool,
    email: &str,
) -> Result<SubscriptionOutcome, sqlx::Error> {
    let record = sqlx::query!(
        r#"
        INSERT INTO subscribers (id, email, subscribed, subscribed_at)
        VALUES ($1, $2, TRUE, $3)
        ON CONFLICT (email) DO UPDATE SET subscribed = TRUE
        RETURNING (xmax = 0) AS "inserted!"
        "#,
        Uuid::new_v4(),
        email,
        Utc::now()
    )
    .fetch_one(pool)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        err
    })?;

    if record.inserted {
        Ok(SubscriptionOutcome::NewSubscription)
    } else {
        Ok(SubscriptionOutcome::Resubscribed)
    }
}

/// Flip an existing record to unsubscribed. Never creates a record: an
/// unknown email leaves the store untouched and reports `NotSubscribed`.
#[tracing::instrument(name = "Marking subscriber as unsubscribed", skip(pool))]
pub async fn mark_unsubscribed(
    pool: &PgPool,
    email: &str,
) -> Result<SubscriptionOutcome, sqlx::Error> {
    let result = sqlx::query!(
        r#"
        UPDATE subscribers SET subscribed = FALSE WHERE email = $1
        "#,
        email
    )
    .execute(pool)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        err
    })?;

    if result.rows_affected() == 0 {
        Ok(SubscriptionOutcome::NotSubscribed)
    } else {
        Ok(SubscriptionOutcome::Unsubscribed)
    }
}
