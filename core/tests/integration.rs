//! Full CRUD lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `TodoService` and
//! `TodoStore` over real HTTP through `UreqTransport`. Catches drift between
//! the client's request shapes and the server's routes.

use mock_server::Todo;
use todo_client::{ApiError, ClientConfig, TodoItem, TodoService, TodoStore, UreqTransport};

/// Serve `seed` on a random local port and return its base URL.
async fn start_server(seed: Vec<Todo>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::serve(listener, mock_server::app_with(seed)));
    format!("http://{addr}")
}

fn service(base_url: &str) -> TodoService<UreqTransport> {
    TodoService::from_config(&ClientConfig::new(base_url).unwrap())
}

fn seed_todo(id: i64, title: &str) -> Todo {
    Todo {
        user_id: 1,
        id,
        title: title.to_string(),
        completed: false,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn crud_lifecycle() {
    let base_url = start_server(Vec::new()).await;
    let service = service(&base_url);

    // Step 1: list is empty.
    assert!(service.list().await.unwrap().is_empty());

    // Step 2: create.
    let created = service.create("Integration test").await.unwrap();
    assert_eq!(created.title.as_deref(), Some("Integration test"));
    assert_eq!(created.completed, Some(false));
    assert_eq!(created.owner_id, Some(1));
    let id = created.id.unwrap();

    // Step 3: get, twice, with no mutation in between.
    let fetched = service.get(id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(service.get(id).await.unwrap(), fetched);

    // Step 4: update title and flag together.
    let updated = service
        .update(&created.with_title("Updated title").toggled())
        .await
        .unwrap();
    assert_eq!(updated.title.as_deref(), Some("Updated title"));
    assert_eq!(updated.completed, Some(true));

    // Step 5: list holds one item.
    assert_eq!(service.list().await.unwrap(), vec![updated]);

    // Step 6: delete.
    service.delete(id).await.unwrap();

    // Step 7: get and delete after delete are ClientError(404).
    assert_eq!(service.get(id).await, Err(ApiError::ClientError(404)));
    assert_eq!(service.delete(id).await, Err(ApiError::ClientError(404)));

    // Step 8: list is empty again.
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn list_decodes_server_shape() {
    let base_url = start_server(vec![seed_todo(1, "a")]).await;
    let todos = service(&base_url).list().await.unwrap();
    assert_eq!(
        todos,
        vec![TodoItem {
            owner_id: Some(1),
            id: Some(1),
            title: Some("a".to_string()),
            completed: Some(false),
        }]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn store_tracks_server_state() {
    let base_url = start_server(vec![seed_todo(1, "a"), seed_todo(2, "b"), seed_todo(3, "c")]).await;
    let store = TodoStore::new(service(&base_url));

    store.fetch_todos().await;
    let ids: Vec<_> = store.todos().iter().map(|t| t.id).collect();
    assert_eq!(ids, [Some(3), Some(2), Some(1)]);

    store.create_todo("buy milk").await;
    let todos = store.todos();
    assert_eq!(todos.len(), 4);
    assert_eq!(todos[0].id, Some(4));
    assert_eq!(todos[0].title.as_deref(), Some("buy milk"));

    let second = todos[2].clone();
    store.update_todo(&second.toggled()).await;
    assert_eq!(store.todos()[2].completed, Some(true));

    store.delete_todo(2).await;
    let ids: Vec<_> = store.todos().iter().map(|t| t.id).collect();
    assert_eq!(ids, [Some(4), Some(3), Some(1)]);
    assert!(store.error().is_none());

    // Deleting again is a 404: error recorded, list untouched.
    let before = store.todos();
    store.delete_todo(2).await;
    assert_eq!(store.error(), Some(ApiError::ClientError(404)));
    assert_eq!(store.todos(), before);
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_server_records_unknown_zero() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let store = TodoStore::new(service(&format!("http://127.0.0.1:{port}")));
    store.fetch_todos().await;
    assert_eq!(store.error(), Some(ApiError::UnknownError(0)));
    assert!(store.todos().is_empty());
}
