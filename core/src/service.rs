//! Typed operations on the `todos` resource.
//!
//! Each operation pairs one endpoint descriptor with one client call and
//! returns the client's result untouched. The service keeps no list state;
//! see `TodoStore` for that.

use crate::client::NetworkClient;
use crate::config::ClientConfig;
use crate::endpoint::{
    CreateTodoEndpoint, DeleteTodoEndpoint, SingleTodoEndpoint, TodoListEndpoint, UpdateTodoEndpoint,
};
use crate::error::ApiError;
use crate::transport::{Transport, UreqTransport};
use crate::types::TodoItem;

/// List, get, create, update and delete todos.
#[derive(Debug, Clone)]
pub struct TodoService<T> {
    client: NetworkClient<T>,
    base_url: String,
}

impl<T: Transport> TodoService<T> {
    pub fn new(client: NetworkClient<T>, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url().to_string(),
        }
    }

    pub fn client(&self) -> &NetworkClient<T> {
        &self.client
    }

    pub async fn list(&self) -> Result<Vec<TodoItem>, ApiError> {
        self.client.fetch(&TodoListEndpoint::new(&self.base_url)).await
    }

    pub async fn get(&self, id: i64) -> Result<TodoItem, ApiError> {
        self.client.fetch(&SingleTodoEndpoint::new(&self.base_url, id)).await
    }

    /// Create an uncompleted todo; the reply carries the server-assigned id.
    pub async fn create(&self, title: &str) -> Result<TodoItem, ApiError> {
        let endpoint = CreateTodoEndpoint::new(&self.base_url, TodoItem::draft(title));
        self.client.fetch(&endpoint).await
    }

    /// Replace the item addressed by `item.id` with `item`'s title and flag.
    pub async fn update(&self, item: &TodoItem) -> Result<TodoItem, ApiError> {
        let endpoint = UpdateTodoEndpoint::new(&self.base_url, item.clone());
        self.client.fetch(&endpoint).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.fetch_empty(&DeleteTodoEndpoint::new(&self.base_url, id)).await
    }
}

impl TodoService<UreqTransport> {
    /// Service over a fresh `UreqTransport`.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(NetworkClient::new(UreqTransport::new()), config)
    }
}
