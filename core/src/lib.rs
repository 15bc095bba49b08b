//! Typed client for a REST `todos` resource.
//!
//! # Overview
//! A request flows one way: `TodoService` picks an endpoint descriptor, the
//! request builder turns it into an `HttpRequest`, `NetworkClient` sends it
//! through a `Transport`, classifies the status and decodes the body.
//! `TodoStore` sits on top and keeps a sorted visible list plus the last
//! error, for whatever UI renders it.
//!
//! # Design
//! - Descriptors are plain values; building a request never does I/O.
//! - The transport is injected, never global. `UreqTransport` is the real
//!   one, `testing::ScriptedTransport` replays canned replies.
//! - Every failure propagates unchanged up to `TodoStore`, which is the only
//!   place errors are caught and recorded.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod request;
pub mod service;
pub mod store;
pub mod testing;
pub mod transport;
pub mod types;

pub use client::{classify_status, NetworkClient};
pub use config::ClientConfig;
pub use endpoint::{
    CreateTodoEndpoint, DeleteTodoEndpoint, Endpoint, SingleTodoEndpoint, TodoListEndpoint, UpdateTodoEndpoint,
};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use request::build_request;
pub use service::TodoService;
pub use store::TodoStore;
pub use transport::{Transport, UreqTransport};
pub use types::{TodoItem, TodoParams};
