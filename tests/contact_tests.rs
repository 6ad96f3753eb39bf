mod test_utils;

use reqwest::StatusCode;
use test_utils::*;

#[actix_rt::test]
async fn submit_redirects_and_thanks_once() {
    let app = TestApp::spawn().await;

    let response = app
        .post_form(
            "/contact",
            &[("name", "Ada"), ("email", "ada@example.com"), ("message", "Hi there")],
        )
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/contact");

    let first = app.get_html("/contact").await;
    assert!(first.contains("Thanks! Your message has been received."));
    assert!(first.contains("<strong>Ada</strong>: Hi there"));

    let second = app.get_html("/contact").await;
    assert!(!second.contains("Thanks! Your message has been received."));
    app.cleanup_test_db().await;
}

#[actix_rt::test]
async fn shows_only_five_newest_messages() {
    let app = TestApp::spawn().await;

    for i in 1..=7 {
        let body = format!("message-{i:02}");
        app.post_form("/contact", &[("name", "Visitor"), ("message", body.as_str())])
            .await;
    }

    let page = app.get_html("/contact").await;

    assert_eq!(page.matches("message-0").count(), 5);
    assert!(!page.contains("message-01"));
    assert!(!page.contains("message-02"));

    let positions: Vec<usize> = (3..=7)
        .rev()
        .map(|i| page.find(&format!("message-{i:02}")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    app.cleanup_test_db().await;
}

#[actix_rt::test]
async fn message_markup_is_rendered_as_text() {
    let app = TestApp::spawn().await;

    app.post_form("/contact", &[("name", "<b>x</b>"), ("message", "<script>alert(2)</script>")])
        .await;

    let page = app.get_html("/contact").await;

    assert!(page.contains("&lt;script&gt;alert(2)&lt;/script&gt;"));
    assert!(!page.contains("<script>alert(2)"));
    assert!(page.contains("<strong>&lt;b&gt;x&lt;/b&gt;</strong>"));
    app.cleanup_test_db().await;
}

#[actix_rt::test]
async fn empty_form_is_accepted() {
    let app = TestApp::spawn().await;

    let response = app.post_form("/contact", &[]).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages WHERE name IS NULL AND message IS NULL")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let page = app.get_html("/contact").await;
    assert!(!page.contains("None"));
    app.cleanup_test_db().await;
}

#[actix_rt::test]
async fn cookieless_submissions_leave_no_pending_flash() {
    let app = TestApp::spawn().await;
    let cookieless = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    for i in 0..200 {
        let response = cookieless
            .post(format!("{}/contact", app.address))
            .form(&[("name", "bot"), ("message", format!("spam-{i}").as_str())])
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    assert_eq!(app.state.flash.pending(), 0);

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages WHERE name = 'bot'")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(stored, 200);
    app.cleanup_test_db().await;
}
