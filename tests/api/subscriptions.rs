use crate::helpers::spawn_app;

#[tokio::test]
async fn subscribing_a_new_email_creates_a_subscribed_record() {
    let app = spawn_app().await;

    let response = app.get_subscribe("a@example.com").await;
    assert_eq!(200, response.status().as_u16());

    let body = response.text().await.expect("Failed to read body.");
    assert!(body.contains("Success!"));
    assert!(body.contains("Thank you for subscribing."));

    let saved = sqlx::query!("SELECT email, subscribed FROM subscribers")
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to fetch saved subscriber");

    assert_eq!(saved.email, "a@example.com");
    assert!(saved.subscribed);
}

#[tokio::test]
async fn subscribing_twice_is_idempotent_and_keeps_a_single_record() {
    let app = spawn_app().await;

    app.get_subscribe("a@example.com").await;
    let second = app.get_subscribe("a@example.com").await;

    assert_eq!(200, second.status().as_u16());
    let body = second.text().await.expect("Failed to read body.");
    assert!(body.contains("You're Back!"));
    assert!(body.contains("Thank you for re-subscribing."));

    let count = sqlx::query!(r#"SELECT COUNT(*) AS "count!" FROM subscribers"#)
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to count subscribers")
        .count;

    assert_eq!(count, 1);

    let saved = sqlx::query!("SELECT subscribed FROM subscribers")
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to fetch saved subscriber");
    assert!(saved.subscribed);
}

#[tokio::test]
async fn unsubscribing_flips_the_flag_without_deleting_the_record() {
    let app = spawn_app().await;

    app.get_subscribe("a@example.com").await;
    let response = app.get_unsubscribe("a@example.com").await;

    assert_eq!(200, response.status().as_u16());
    let body = response.text().await.expect("Failed to read body.");
    assert!(body.contains("You have been successfully unsubscribed."));

    let saved = sqlx::query!("SELECT email, subscribed FROM subscribers")
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to fetch saved subscriber");

    assert_eq!(saved.email, "a@example.com");
    assert!(!saved.subscribed);
}

#[tokio::test]
async fn unsubscribing_an_unknown_email_creates_nothing() {
    let app = spawn_app().await;

    let response = app.get_unsubscribe("ghost@example.com").await;

    assert_eq!(200, response.status().as_u16());
    let body = response.text().await.expect("Failed to read body.");
    assert!(body.contains("Already Unsubscribed"));
    assert!(body.contains("Your email was not found in our subscriber list."));

    let count = sqlx::query!(r#"SELECT COUNT(*) AS "count!" FROM subscribers"#)
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to count subscribers")
        .count;

    assert_eq!(count, 0);
}

#[tokio::test]
async fn unsubscribing_is_idempotent() {
    let app = spawn_app().await;

    app.get_subscribe("a@example.com").await;
    app.get_unsubscribe("a@example.com").await;
    let second = app.get_unsubscribe("a@example.com").await;

    assert_eq!(200, second.status().as_u16());
    let body = second.text().await.expect("Failed to read body.");
    assert!(body.contains("You have been successfully unsubscribed."));

    let saved = sqlx::query!("SELECT subscribed FROM subscribers")
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to fetch saved subscriber");
    assert!(!saved.subscribed);
}

#[tokio::test]
async fn resubscribing_after_unsubscribe_reuses_the_same_record() {
    let app = spawn_app().await;

    app.get_subscribe("a@example.com").await;
    let original = sqlx::query!("SELECT id FROM subscribers")
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to fetch saved subscriber")
        .id;

    app.get_unsubscribe("a@example.com").await;
    let response = app.get_subscribe("a@example.com").await;

    assert_eq!(200, response.status().as_u16());
    let body = response.text().await.expect("Failed to read body.");
    assert!(body.contains("You're Back!"));

    let rows = sqlx::query!("SELECT id, subscribed FROM subscribers")
        .fetch_all(&app.db_pool)
        .await
        .expect("Failed to fetch subscribers");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, original);
    assert!(rows[0].subscribed);
}

#[tokio::test]
async fn email_lookup_is_exact_match_with_no_normalization() {
    let app = spawn_app().await;

    app.get_subscribe("a@example.com").await;
    let response = app.get_subscribe("A@example.com").await;

    assert_eq!(200, response.status().as_u16());
    let body = response.text().await.expect("Failed to read body.");
    assert!(body.contains("Success!"));

    let count = sqlx::query!(r#"SELECT COUNT(*) AS "count!" FROM subscribers"#)
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to count subscribers")
        .count;

    assert_eq!(count, 2);
}
