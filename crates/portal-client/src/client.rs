use derive_builder::Builder;
use log::{debug, warn};
use reqwest::{header::COOKIE, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{
    api_interfaces::{
        update::UpdateRequest, user_info::UserInfo, user_options::UserOptions,
        user_phones::UserPhones, user_queues::UserQueues, Acknowledged, ApiResult,
    },
    constants::*,
    error::{GetError, PostError},
    ids::{OptionId, QueueId},
    Session,
};

/// Endpoint paths, relative to the portal base URL.
#[derive(Builder, Clone, Debug, PartialEq, Eq)]
#[builder(setter(into))]
pub struct Endpoints {
    #[builder(default = "USER_INFO_PATH.to_string()")]
    pub user_info: String,
    #[builder(default = "USER_OPTIONS_PATH.to_string()")]
    pub user_options: String,
    #[builder(default = "USER_PHONES_PATH.to_string()")]
    pub user_phones: String,
    #[builder(default = "USER_QUEUES_PATH.to_string()")]
    pub user_queues: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            user_info: USER_INFO_PATH.to_string(),
            user_options: USER_OPTIONS_PATH.to_string(),
            user_phones: USER_PHONES_PATH.to_string(),
            user_queues: USER_QUEUES_PATH.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EndpointConfigError {
    #[error("path for endpoint {0} must start with '/' (got: {1})")]
    RelativePath(&'static str, String),
    #[error("path for endpoint {0} must not start with '//' (got: {1})")]
    SchemeRelativePath(&'static str, String),
}

impl Endpoints {
    /// Deprecated prefix-less routes of older portal deployments.
    ///
    /// Phones were only ever served under `/api`.
    pub fn legacy() -> Self {
        Self {
            user_info: LEGACY_USER_INFO_PATH.to_string(),
            user_options: LEGACY_USER_OPTIONS_PATH.to_string(),
            user_phones: USER_PHONES_PATH.to_string(),
            user_queues: LEGACY_USER_QUEUES_PATH.to_string(),
        }
    }

    pub fn builder() -> EndpointsBuilder {
        EndpointsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), EndpointConfigError> {
        for (name, path) in [
            ("user_info", &self.user_info),
            ("user_options", &self.user_options),
            ("user_phones", &self.user_phones),
            ("user_queues", &self.user_queues),
        ] {
            if !path.starts_with('/') {
                return Err(EndpointConfigError::RelativePath(name, path.clone()));
            }
            if path.starts_with("//") {
                return Err(EndpointConfigError::SchemeRelativePath(name, path.clone()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ClientInitError {
    #[error("invalid endpoint configuration: {0}")]
    InvalidEndpointConfig(#[from] EndpointConfigError),
    #[error("invalid base url {0}: {1}")]
    InvalidBaseUrl(String, String),
    #[error("unsupported scheme `{0}` in base url, expected http or https")]
    UnsupportedScheme(String),
}

#[derive(Clone, Debug)]
struct ResolvedEndpoints {
    user_info: Url,
    user_options: Url,
    user_phones: Url,
    user_queues: Url,
}

/// Client for the calling portal API.
#[derive(Clone, Debug)]
pub struct Client {
    http_client: reqwest::Client,
    endpoints: ResolvedEndpoints,
    session: Option<Session>,
}

impl Client {
    pub fn new(
        http_client: reqwest::Client,
        base_url: &str,
        endpoints: Option<Endpoints>,
        session: Option<Session>,
    ) -> Result<Self, ClientInitError> {
        let endpoints = endpoints.unwrap_or_default();
        endpoints.validate()?;
        let invalid = |e: &dyn std::fmt::Display| {
            ClientInitError::InvalidBaseUrl(base_url.to_string(), e.to_string())
        };
        let mut base = Url::parse(base_url).map_err(|e| invalid(&e))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(ClientInitError::UnsupportedScheme(base.scheme().to_string()));
        }
        // endpoint paths live below the base path, which is a directory
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        // "./" keeps the join below the base path and on the base origin
        let join = |path: &str| base.join(&format!(".{}", path)).map_err(|e| invalid(&e));
        let endpoints = ResolvedEndpoints {
            user_info: join(&endpoints.user_info)?,
            user_options: join(&endpoints.user_options)?,
            user_phones: join(&endpoints.user_phones)?,
            user_queues: join(&endpoints.user_queues)?,
        };
        Ok(Self {
            http_client,
            endpoints,
            session,
        })
    }

    pub async fn get_user_info(&self) -> Result<ApiResult<UserInfo>, GetError> {
        self.get(&self.endpoints.user_info).await
    }

    pub async fn get_user_options(&self) -> Result<ApiResult<UserOptions>, GetError> {
        self.get(&self.endpoints.user_options).await
    }

    pub async fn get_user_phones(&self) -> Result<ApiResult<UserPhones>, GetError> {
        self.get(&self.endpoints.user_phones).await
    }

    pub async fn get_user_queues(&self) -> Result<ApiResult<UserQueues>, GetError> {
        self.get(&self.endpoints.user_queues).await
    }

    /// Enable or disable call intercept / call waiting.
    pub async fn set_user_option(
        &self,
        id: OptionId,
        checked: bool,
    ) -> Result<ApiResult<Acknowledged>, PostError> {
        let request = UpdateRequest {
            id: id.as_str().to_string(),
            checked,
        };
        self.post(&self.endpoints.user_options, &request).await
    }

    /// Join or leave a call queue as an agent.
    pub async fn set_queue_joined(
        &self,
        queue: &QueueId,
        joined: bool,
    ) -> Result<ApiResult<Acknowledged>, PostError> {
        let request = UpdateRequest {
            id: queue.to_string(),
            checked: joined,
        };
        self.post(&self.endpoints.user_queues, &request).await
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.session {
            Some(session) => builder.header(COOKIE, session.header_value()),
            None => builder,
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &Url) -> Result<ApiResult<T>, GetError> {
        debug!("GET {}", url);
        let response = self
            .request(self.http_client.get(url.clone()))
            .send()
            .await?;
        if !response.status().is_success() {
            warn!("GET {} failed with status {}", url, response.status());
            return Err(GetError::ResponseError(response.status()));
        }
        let body = response.text().await.map_err(GetError::ResponseBodyError)?;
        debug!("GET {}: {}", url, body);
        Ok(serde_json::from_str(&body)?)
    }

    async fn post(
        &self,
        url: &Url,
        request: &UpdateRequest,
    ) -> Result<ApiResult<Acknowledged>, PostError> {
        let payload = serde_json::to_string(request).map_err(PostError::SerializeError)?;
        debug!("POST {}: {}", url, payload);
        let response = self
            .request(self.http_client.post(url.clone()))
            .header("Content-Type", "application/json")
            .body(payload)
            .send()
            .await?;
        if !response.status().is_success() {
            warn!("POST {} failed with status {}", url, response.status());
            return Err(PostError::ResponseError(response.status()));
        }
        let body = response.text().await.map_err(PostError::ResponseBodyError)?;
        debug!("POST {}: {}", url, body);
        serde_json::from_str(&body).map_err(PostError::ParseError)
    }
}
