//! reqwest-backed implementation of [`StudentApi`].

use async_trait::async_trait;
use common::{StudentId, StudentRecord};
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::api::StudentApi;
use crate::error::{ApiError, Result};

const STUDENTS_PATH: &str = "students";

/// Talks to a student records backend over HTTP.
///
/// The base URL may carry a path prefix (`http://host/api`); resource paths
/// are appended to it.
#[derive(Debug, Clone)]
pub struct HttpStudentApi {
    client: reqwest::Client,
    base_url: url::Url,
}

impl HttpStudentApi {
    /// Creates a client for the backend at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a client reusing an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self> {
        let base_url = url::Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        Ok(Self { client, base_url })
    }

    /// Builds `{base}/students` or `{base}/students/{id}`.
    fn students_url(&self, id: Option<StudentId>) -> Result<url::Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                ApiError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase)
            })?;
            segments.pop_if_empty().push(STUDENTS_PATH);
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        Ok(url)
    }

    async fn fetch(&self, method: Method, url: url::Url) -> Result<reqwest::Response> {
        let response = self.client.request(method, url).send().await?;
        Ok(response.error_for_status()?)
    }
}

#[async_trait]
impl StudentApi for HttpStudentApi {
    #[tracing::instrument(skip(self), fields(base_url = %self.base_url))]
    async fn list_students(&self) -> Result<Vec<StudentRecord>> {
        let url = self.students_url(None)?;
        let response = self.fetch(Method::GET, url).await?;
        let students: Vec<StudentRecord> = json(response).await?;

        tracing::debug!(count = students.len(), "fetched students");
        Ok(students)
    }

    #[tracing::instrument(skip(self), fields(base_url = %self.base_url))]
    async fn delete_student(&self, id: StudentId) -> Result<()> {
        let url = self.students_url(Some(id))?;
        self.fetch(Method::DELETE, url).await?;

        tracing::debug!(%id, "deleted student");
        Ok(())
    }
}

async fn json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
