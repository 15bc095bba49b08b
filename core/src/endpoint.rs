//! Endpoint descriptors for the todo API.
//!
//! # Design
//! An `Endpoint` describes *what* to call: base URL, path, method, headers and
//! parameters. It never performs I/O and can be turned into any number of
//! requests. Each todo operation has its own descriptor type; they share the
//! same accessors so the request builder and client stay generic.

use serde::Serialize;

use crate::http::HttpMethod;
use crate::types::{TodoItem, TodoParams};

/// Collection path on the todo API.
pub const TODOS_PATH: &str = "/todos";

/// Immutable description of one API call.
pub trait Endpoint {
    /// Parameter mapping. Must serialize to a JSON object.
    type Params: Serialize;

    fn base_url(&self) -> &str;

    fn path(&self) -> String;

    fn method(&self) -> HttpMethod;

    /// Headers copied verbatim onto the request; `None` sends none.
    fn headers(&self) -> Option<Vec<(String, String)>>;

    /// Query parameters for GET, JSON body otherwise; `None` sends neither.
    fn parameters(&self) -> Option<Self::Params>;
}

/// The headers every todo endpoint sends.
pub fn json_headers() -> Vec<(String, String)> {
    vec![("Content-Type".to_string(), "application/json".to_string())]
}

fn item_path(id: i64) -> String {
    format!("{TODOS_PATH}/{id}")
}

/// `GET /todos`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListEndpoint {
    base_url: String,
}

impl TodoListEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Endpoint for TodoListEndpoint {
    type Params = ();

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn path(&self) -> String {
        TODOS_PATH.to_string()
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn headers(&self) -> Option<Vec<(String, String)>> {
        Some(json_headers())
    }

    fn parameters(&self) -> Option<()> {
        None
    }
}

/// `GET /todos/{id}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleTodoEndpoint {
    base_url: String,
    id: i64,
}

impl SingleTodoEndpoint {
    pub fn new(base_url: impl Into<String>, id: i64) -> Self {
        Self {
            base_url: base_url.into(),
            id,
        }
    }
}

impl Endpoint for SingleTodoEndpoint {
    type Params = ();

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn path(&self) -> String {
        item_path(self.id)
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn headers(&self) -> Option<Vec<(String, String)>> {
        Some(json_headers())
    }

    fn parameters(&self) -> Option<()> {
        None
    }
}

/// `POST /todos` with `{title, completed}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodoEndpoint {
    base_url: String,
    item: TodoItem,
}

impl CreateTodoEndpoint {
    pub fn new(base_url: impl Into<String>, item: TodoItem) -> Self {
        Self {
            base_url: base_url.into(),
            item,
        }
    }
}

impl Endpoint for CreateTodoEndpoint {
    type Params = TodoParams;

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn path(&self) -> String {
        TODOS_PATH.to_string()
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn headers(&self) -> Option<Vec<(String, String)>> {
        Some(json_headers())
    }

    fn parameters(&self) -> Option<TodoParams> {
        Some(self.item.params())
    }
}

/// `PUT /todos/{id}` with `{title, completed}`.
///
/// An item without an id addresses `/todos/0`, which the server rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTodoEndpoint {
    base_url: String,
    item: TodoItem,
}

impl UpdateTodoEndpoint {
    pub fn new(base_url: impl Into<String>, item: TodoItem) -> Self {
        Self {
            base_url: base_url.into(),
            item,
        }
    }
}

impl Endpoint for UpdateTodoEndpoint {
    type Params = TodoParams;

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn path(&self) -> String {
        item_path(self.item.id.unwrap_or(0))
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Put
    }

    fn headers(&self) -> Option<Vec<(String, String)>> {
        Some(json_headers())
    }

    fn parameters(&self) -> Option<TodoParams> {
        Some(self.item.params())
    }
}

/// `DELETE /todos/{id}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTodoEndpoint {
    base_url: String,
    id: i64,
}

impl DeleteTodoEndpoint {
    pub fn new(base_url: impl Into<String>, id: i64) -> Self {
        Self {
            base_url: base_url.into(),
            id,
        }
    }
}

impl Endpoint for DeleteTodoEndpoint {
    type Params = ();

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn path(&self) -> String {
        item_path(self.id)
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Delete
    }

    fn headers(&self) -> Option<Vec<(String, String)>> {
        Some(json_headers())
    }

    fn parameters(&self) -> Option<()> {
        None
    }
}
