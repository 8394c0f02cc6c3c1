use todo_client::store::MemoryTokenStore;
use wiremock::{
    matchers::{header, method, path},
    Mock, ResponseTemplate,
};

use crate::helper::{spawn_app, task_list, titles, NoAuthorization, TOKEN};

#[tokio::test]
async fn no_persisted_token_means_no_fetch() {
    let mut t = spawn_app(true, MemoryTokenStore::default()).await;

    t.app.start().await.unwrap();

    assert!(t.requests().await.is_empty());
    assert!(!t.app.state().shows_tasks());
}

#[tokio::test]
async fn a_persisted_token_restores_the_session_with_one_fetch() {
    let mut t = spawn_app(true, MemoryTokenStore::with_token(TOKEN)).await;

    Mock::given(method("GET"))
        .and(path("/tasks/"))
        .and(header("Authorization", "Bearer abc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(task_list(&[(1, "Buy milk", false)])),
        )
        .expect(1)
        .mount(&t.server)
        .await;

    t.app.start().await.unwrap();

    assert_eq!(t.app.token(), Some(TOKEN));
    assert_eq!(titles(&t.app.state().tasks.items), vec!["Buy milk"]);
    assert_eq!(t.requests().await.len(), 1);
}

#[tokio::test]
async fn a_rejected_persisted_token_still_counts_as_a_session() {
    let mut t = spawn_app(true, MemoryTokenStore::with_token("expired")).await;

    Mock::given(method("GET"))
        .and(path("/tasks/"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&t.server)
        .await;

    assert!(t.app.start().await.is_err());
    assert!(t.app.state().shows_tasks());
    assert!(t.app.state().tasks.items.is_empty());
}

#[tokio::test]
async fn open_mode_fetches_once_without_credentials() {
    let mut t = spawn_app(false, MemoryTokenStore::default()).await;

    Mock::given(method("GET"))
        .and(path("/tasks/"))
        .and(NoAuthorization)
        .respond_with(
            ResponseTemplate::new(200).set_body_json(task_list(&[(1, "Buy milk", true)])),
        )
        .expect(1)
        .mount(&t.server)
        .await;

    t.app.start().await.unwrap();

    assert!(t.app.state().tasks.items[0].completed);
}
