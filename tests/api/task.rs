use serde_json::json;
use todo_client::{
    app::error::AppError,
    domain::task::{Task, TaskId},
    store::MemoryTokenStore,
};
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, ResponseTemplate,
};

use crate::helper::{spawn_app, spawn_logged_in_app, task_list, titles, NoAuthorization};

#[tokio::test]
async fn adding_a_task_posts_it_clears_the_input_and_refreshes_once() {
    let mut t = spawn_logged_in_app().await;

    Mock::given(method("POST"))
        .and(path("/tasks/"))
        .and(header("Authorization", "Bearer abc"))
        .and(body_json(json!({"title": "Buy milk", "completed": false})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 1, "title": "Buy milk", "completed": false})),
        )
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tasks/"))
        .and(header("Authorization", "Bearer abc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(task_list(&[(1, "Buy milk", false)])),
        )
        .expect(1)
        .mount(&t.server)
        .await;

    t.app.set_title("Buy milk");
    t.app.add_task().await.unwrap();

    assert!(t.app.state().tasks.title.is_empty());
    assert_eq!(titles(&t.app.state().tasks.items), vec!["Buy milk"]);
}

#[tokio::test]
async fn an_empty_title_is_refused_before_any_request() {
    let mut t = spawn_logged_in_app().await;

    let result = t.app.add_task().await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
    assert!(t.requests().await.is_empty());
}

#[tokio::test]
async fn toggling_sends_the_full_record_with_the_flag_flipped() {
    let mut t = spawn_logged_in_app().await;

    Mock::given(method("PUT"))
        .and(path("/tasks/5"))
        .and(header("Authorization", "Bearer abc"))
        .and(body_json(json!({"id": 5, "title": "X", "completed": true})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tasks/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_list(&[(5, "X", true)])))
        .expect(1)
        .mount(&t.server)
        .await;

    let task = Task::new(TaskId::Number(5), "X", false);
    t.app.toggle_complete(&task).await.unwrap();

    assert!(t.app.state().tasks.items[0].completed);
}

#[tokio::test]
async fn deleting_a_task_refreshes_the_list() {
    let mut t = spawn_logged_in_app().await;

    Mock::given(method("DELETE"))
        .and(path("/tasks/5"))
        .and(header("Authorization", "Bearer abc"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Task deleted successfully"})),
        )
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tasks/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&t.server)
        .await;

    t.app.delete_task(&TaskId::Number(5)).await.unwrap();

    assert!(t.app.state().tasks.items.is_empty());
}

#[tokio::test]
async fn a_refused_mutation_still_refreshes() {
    let mut t = spawn_logged_in_app().await;

    Mock::given(method("DELETE"))
        .and(path("/tasks/9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Task not found"})))
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tasks/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(task_list(&[(1, "Buy milk", false)])),
        )
        .expect(1)
        .mount(&t.server)
        .await;

    t.app.delete_task(&TaskId::Number(9)).await.unwrap();

    assert_eq!(titles(&t.app.state().tasks.items), vec!["Buy milk"]);
}

#[tokio::test]
async fn a_failed_fetch_leaves_the_list_untouched() {
    let mut t = spawn_logged_in_app().await;

    Mock::given(method("GET"))
        .and(path("/tasks/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(task_list(&[(1, "Buy milk", false)])),
        )
        .up_to_n_times(1)
        .mount(&t.server)
        .await;
    t.app.fetch_tasks().await.unwrap();

    Mock::given(method("GET"))
        .and(path("/tasks/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&t.server)
        .await;
    let result = t.app.fetch_tasks().await;

    assert!(matches!(result, Err(AppError::ApiError(_))));
    assert_eq!(titles(&t.app.state().tasks.items), vec!["Buy milk"]);
}

#[tokio::test]
async fn task_actions_need_a_session() {
    let mut t = spawn_app(true, MemoryTokenStore::default()).await;

    t.app.set_title("Buy milk");
    assert!(matches!(
        t.app.add_task().await,
        Err(AppError::Unavailable(_))
    ));
    assert!(matches!(
        t.app.fetch_tasks().await,
        Err(AppError::Unavailable(_))
    ));
    assert!(t.requests().await.is_empty());
}

#[tokio::test]
async fn open_mode_sends_no_credentials() {
    let mut t = spawn_app(false, MemoryTokenStore::default()).await;

    Mock::given(method("POST"))
        .and(path("/tasks/"))
        .and(NoAuthorization)
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tasks/"))
        .and(NoAuthorization)
        .respond_with(
            ResponseTemplate::new(200).set_body_json(task_list(&[(1, "Buy milk", false)])),
        )
        .expect(1)
        .mount(&t.server)
        .await;

    t.app.set_title("Buy milk");
    t.app.add_task().await.unwrap();

    assert_eq!(titles(&t.app.state().tasks.items), vec!["Buy milk"]);
}
