//! Caller-side todo list with a last-error slot.
//!
//! # Design
//! Network calls run without holding any lock. Only applying a result to the
//! list happens under the mutex, and that step never awaits, so concurrent
//! completions are applied one at a time without lost updates. A failed
//! operation records its error and leaves the list exactly as it was.

use parking_lot::Mutex;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::service::TodoService;
use crate::transport::Transport;
use crate::types::TodoItem;

#[derive(Debug, Default)]
struct State {
    todos: Vec<TodoItem>,
    error: Option<ApiError>,
}

/// Visible todo list kept in sync with the server through a `TodoService`.
///
/// The list is always sorted by descending id, with absent ids last.
#[derive(Debug)]
pub struct TodoStore<T> {
    service: TodoService<T>,
    state: Mutex<State>,
}

impl<T: Transport> TodoStore<T> {
    pub fn new(service: TodoService<T>) -> Self {
        Self {
            service,
            state: Mutex::new(State::default()),
        }
    }

    pub fn service(&self) -> &TodoService<T> {
        &self.service
    }

    /// Snapshot of the visible list.
    pub fn todos(&self) -> Vec<TodoItem> {
        self.state.lock().todos.clone()
    }

    /// Most recent failure, if any. Successes do not clear it.
    pub fn error(&self) -> Option<ApiError> {
        self.state.lock().error.clone()
    }

    pub fn clear_error(&self) {
        self.state.lock().error = None;
    }

    /// Replace the list with everything on the server.
    pub async fn fetch_todos(&self) {
        let result = self.service.list().await;
        self.apply("fetch_todos", result, |todos, fetched| *todos = fetched);
    }

    /// Replace the list with the single item `id`.
    pub async fn fetch_single_todo(&self, id: i64) {
        let result = self.service.get(id).await;
        self.apply("fetch_single_todo", result, |todos, item| *todos = vec![item]);
    }

    /// Create an item titled `title` and add the server's copy to the list.
    pub async fn create_todo(&self, title: &str) {
        let result = self.service.create(title).await;
        self.apply("create_todo", result, |todos, item| todos.push(item));
    }

    /// Send `item` as-is and swap the server's copy in for the entry with the
    /// same id. To toggle completion pass `item.toggled()`.
    pub async fn update_todo(&self, item: &TodoItem) {
        let result = self.service.update(item).await;
        let id = item.id;
        self.apply("update_todo", result, |todos, updated| {
            if let Some(slot) = todos.iter_mut().find(|todo| todo.id == id) {
                *slot = updated;
            }
        });
    }

    /// Delete `id` on the server, then drop it from the list.
    pub async fn delete_todo(&self, id: i64) {
        let result = self.service.delete(id).await;
        self.apply("delete_todo", result, |todos, ()| {
            if let Some(index) = todos.iter().position(|todo| todo.id == Some(id)) {
                todos.remove(index);
            }
        });
    }

    fn apply<R>(&self, operation: &str, result: Result<R, ApiError>, mutate: impl FnOnce(&mut Vec<TodoItem>, R)) {
        let mut state = self.state.lock();
        match result {
            Ok(value) => {
                mutate(&mut state.todos, value);
                sort_by_id_desc(&mut state.todos);
                info!(operation, count = state.todos.len(), "todo list updated");
            }
            Err(err) => {
                warn!(operation, error = %err, "todo operation failed");
                state.error = Some(err.normalized());
            }
        }
    }
}

/// Stable sort, highest id first; an absent id counts as 0.
fn sort_by_id_desc(todos: &mut [TodoItem]) {
    todos.sort_by_key(|todo| std::cmp::Reverse(todo.id.unwrap_or(0)));
}
