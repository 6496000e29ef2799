//! Share backend HTTP client

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::{NewShare, Share, ShareId};
use crate::domain::ports::ShareStore;
use crate::error::ShareApiError;

/// Implementation of the share store against the backend REST API
#[derive(Clone)]
pub struct HttpShareStore {
    http: Client,
    base_url: String,
}

impl HttpShareStore {
    /// No request timeout is configured; a slow backend simply delays the next render.
    pub fn new(base_url: &str) -> Result<Self, ShareApiError> {
        let http = Client::builder().build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ShareApiError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ShareApiError::Deserialization(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ShareApiError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), ShareApiError> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ShareApiError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

fn share_form(share: &NewShare) -> Result<Form, ShareApiError> {
    let form = match share {
        NewShare::File(file) => {
            let part = Part::bytes(file.bytes.clone())
                .file_name(file.name.clone())
                .mime_str(file.mime)?;
            Form::new().part("file", part)
        }
        NewShare::Text(text) => Form::new().text("content", text.clone()),
    };
    Ok(form)
}

#[async_trait]
impl ShareStore for HttpShareStore {
    async fn list_shares(&self) -> Result<Vec<Share>, ShareApiError> {
        let response = self.http.get(self.url("/shares")).send().await?;
        self.handle_response(response).await
    }

    async fn create_share(&self, share: &NewShare) -> Result<(), ShareApiError> {
        let response = self
            .http
            .post(self.url("/share"))
            .multipart(share_form(share)?)
            .send()
            .await?;
        self.handle_empty_response(response).await
    }

    async fn delete_share(&self, id: ShareId) -> Result<(), ShareApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/share/{}", id)))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }
}
