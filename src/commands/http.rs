//! HTTP Transport
//!
//! `TodoBackend` over the JSON HTTP API. Uses the fetch API on wasm32.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};

use super::todo::{toggle_completed_path, update_name_path, FETCH_ALL_PATH};
use super::TodoBackend;
use crate::error::{TodoError, TodoResult};
use crate::models::{TodoId, TodoRecord, UpdateNameArgs};

/// Backend reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// `base_url` must not end with a slash (see `ApiConfig::resolve_base_url`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send and return the body text. Non-2xx is an error.
    async fn send(&self, request: RequestBuilder, path: &str) -> TodoResult<String> {
        let response = request
            .send()
            .await
            .map_err(|e| TodoError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(TodoError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait(?Send)]
impl TodoBackend for HttpBackend {
    async fn fetch_all(&self) -> TodoResult<Vec<TodoRecord>> {
        let request = self.client.get(self.url(FETCH_ALL_PATH));
        let body = self.send(request, FETCH_ALL_PATH).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn update_name(&self, id: &TodoId, name: &str) -> TodoResult<()> {
        let path = update_name_path(id);
        let request = self
            .client
            .post(self.url(&path))
            .json(&UpdateNameArgs { name });
        self.send(request, &path).await?;
        Ok(())
    }

    async fn toggle_completed(&self, id: &TodoId) -> TodoResult<()> {
        let path = toggle_completed_path(id);
        let request = self.client.post(self.url(&path));
        self.send(request, &path).await?;
        Ok(())
    }
}
