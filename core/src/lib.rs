//! Client core for a remote-backed to-do list.
//!
//! # Overview
//! `TodoClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `TodoSession` pairs it
//! with a `Transport` and keeps the local task list in step with the server:
//! the list only moves after the remote call has succeeded.
//!
//! # Design
//! - `TodoClient` is stateless; it holds the base URL and the username.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and the protocol is testable as plain data.
//! - The local list is a sequence of immutable `TaskList` snapshots.
//! - Every session operation returns a typed `Result`; failures are logged
//!   through `tracing` and never retried.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod state;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use session::TodoSession;
pub use state::TaskList;
pub use types::{NewTask, Task, TaskId, TaskUpdate, User, UserStatus};
