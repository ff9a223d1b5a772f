//! Stateless HTTP request builder and response parser for the users/todos API.
//!
//! # Design
//! `TodoClient` holds only the base URL and the username and carries no mutable
//! state between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Executing the round-trip is someone else's job, which keeps
//! this module deterministic and free of I/O.

use urlencoding::encode;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreatedTask, NewTask, Task, TaskId, TaskUpdate, User};

/// Synchronous, stateless client for the users/todos API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
    username: String,
}

impl TodoClient {
    pub fn new(base_url: &str, username: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url, &config.username)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    fn user_url(&self) -> String {
        format!("{}/users/{}", self.base_url, encode(&self.username))
    }

    fn task_url(&self, id: TaskId) -> String {
        format!("{}/todos/{id}", self.base_url)
    }

    pub fn build_check_user(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.user_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_user(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            path: self.user_url(),
            headers: vec![accept_json()],
            body: None,
        }
    }

    pub fn build_load_tasks(&self) -> HttpRequest {
        self.build_check_user()
    }

    /// Build the create request. The label is sent as given; only a label
    /// that is blank after trimming is rejected.
    pub fn build_create_task(&self, label: &str) -> Result<HttpRequest, ApiError> {
        if label.trim().is_empty() {
            return Err(ApiError::EmptyLabel);
        }
        let input = NewTask {
            label: label.to_string(),
            is_done: false,
        };
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos/{}", self.base_url, encode(&self.username)),
            headers: json_headers(),
            body: Some(to_json(&input)?),
        })
    }

    pub fn build_update_task(&self, id: TaskId, input: &TaskUpdate) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.task_url(id),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_complete_task(&self, id: TaskId) -> Result<HttpRequest, ApiError> {
        self.build_update_task(id, &TaskUpdate::done())
    }

    pub fn build_delete_task(&self, id: TaskId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.task_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Existence check: any 2xx means the user exists, anything else means
    /// it does not.
    pub fn parse_check_user(&self, response: &HttpResponse) -> bool {
        response.is_success()
    }

    pub fn parse_create_user(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_load_tasks(&self, response: HttpResponse) -> Result<Vec<Task>, ApiError> {
        check_status(&response)?;
        let user: User = from_json(&response.body)?;
        Ok(user.todos)
    }

    /// Returns the identifier the server assigned to the new task.
    pub fn parse_create_task(&self, response: HttpResponse) -> Result<TaskId, ApiError> {
        check_status(&response)?;
        let created: CreatedTask = from_json(&response.body)?;
        Ok(created.id)
    }

    pub fn parse_update_task(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_complete_task(&self, response: HttpResponse) -> Result<(), ApiError> {
        self.parse_update_task(response)
    }

    pub fn parse_delete_task(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn accept_json() -> (String, String) {
    ("accept".to_string(), "application/json".to_string())
}

fn json_headers() -> Vec<(String, String)> {
    vec![
        accept_json(),
        ("content-type".to_string(), "application/json".to_string()),
    ]
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
