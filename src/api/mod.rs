use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, Secret};

use crate::domain::credentials::NewUser;
use crate::domain::task::{NewTask, Task, TaskId};

pub mod schema;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{endpoint} answered with {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// What the service made of a signup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    Created,
    Rejected(String),
}

/// Typed access to the task service.
///
/// Every request goes out as is: no retries and, unless configured, no
/// timeout.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&Secret<String>>,
    ) -> RequestBuilder {
        let builder = self
            .http_client
            .request(method, format!("{}{}", self.base_url, path));

        match token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    /// Exchange credentials for a bearer token.
    ///
    /// `None` means the service did not issue a token, whatever the status.
    #[tracing::instrument(name = "Log in", skip(self, password))]
    pub async fn login(
        &self,
        username: &str,
        password: &Secret<String>,
    ) -> Result<Option<Secret<String>>, ApiError> {
        let body = schema::LoginRequestBody {
            username,
            password: password.expose_secret(),
        };

        let response = self
            .request(Method::POST, "/login", None)
            .form(&body)
            .send()
            .await?;

        tracing::debug!(status = %response.status(), "login answered");
        let body: schema::LoginResponseBody = response.json().await?;

        Ok(body.into_token())
    }

    #[tracing::instrument(name = "Sign up", skip(self, user), fields(username = %user.username))]
    pub async fn signup(&self, user: &NewUser) -> Result<SignupOutcome, ApiError> {
        let body = schema::SignupRequestBody {
            username: user.username.as_ref(),
            email: user.username.email(),
            hashed_password: user.password.expose_secret(),
        };

        let response = self
            .request(Method::POST, "/signup", None)
            .json(&body)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(SignupOutcome::Created);
        }

        let status = response.status();
        let body: schema::SignupFailureBody = response.json().await?;
        tracing::warn!(%status, detail = %body.detail_message(), "signup rejected");

        Ok(SignupOutcome::Rejected(body.detail_message()))
    }

    #[tracing::instrument(name = "List tasks", skip(self, token))]
    pub async fn list_tasks(&self, token: Option<&Secret<String>>) -> Result<Vec<Task>, ApiError> {
        let response = self.request(Method::GET, "/tasks/", token).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: "GET /tasks/",
                status,
            });
        }

        Ok(response.json().await?)
    }

    #[tracing::instrument(name = "Create task", skip(self, token), fields(title = %task.title))]
    pub async fn create_task(
        &self,
        token: Option<&Secret<String>>,
        task: &NewTask,
    ) -> Result<StatusCode, ApiError> {
        let response = self
            .request(Method::POST, "/tasks/", token)
            .json(task)
            .send()
            .await?;

        Ok(response.status())
    }

    #[tracing::instrument(name = "Update task", skip(self, token), fields(id = %task.id))]
    pub async fn update_task(
        &self,
        token: Option<&Secret<String>>,
        task: &Task,
    ) -> Result<StatusCode, ApiError> {
        let response = self
            .request(Method::PUT, &format!("/tasks/{}", task.id), token)
            .json(task)
            .send()
            .await?;

        Ok(response.status())
    }

    #[tracing::instrument(name = "Delete task", skip(self, token))]
    pub async fn delete_task(
        &self,
        token: Option<&Secret<String>>,
        id: &TaskId,
    ) -> Result<StatusCode, ApiError> {
        let response = self
            .request(Method::DELETE, &format!("/tasks/{}", id), token)
            .send()
            .await?;

        Ok(response.status())
    }
}
