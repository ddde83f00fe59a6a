// src/services/request.rs
//! Request dispatcher: GET, urlencoded POST, and form-data POST with a
//! single completion contract.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, warn};

use crate::common::DispatchError;
use crate::encoding::encode_to_string_url;

pub const STATUS_SUCCESS: u16 = 200;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_FORBIDDEN: u16 = 403;

pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

// ============================================================================
// Request and response types
// ============================================================================

/// How the caller wants the response body handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataType {
    Json,
    #[default]
    Text,
}

impl DataType {
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            DataType::Json
        } else {
            DataType::Text
        }
    }
}

/// Ordered text entries of a submitted form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `[{ "name": .., "value": .. }, ..]`, the shape the query encoder
    /// accepts at the top level.
    pub fn to_value(&self) -> Value {
        Value::Array(
            self.entries
                .iter()
                .map(|(name, value)| serde_json::json!({ "name": name, "value": value }))
                .collect(),
        )
    }

    fn to_multipart(&self) -> reqwest::multipart::Form {
        self.entries
            .iter()
            .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                form.text(name.clone(), value.clone())
            })
    }
}

/// Caller-supplied body before it is encoded for the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Value(Value),
    Form(FormData),
}

impl Payload {
    fn encode(&self) -> String {
        match self {
            Payload::Value(value) => encode_to_string_url(value),
            Payload::Form(form) => encode_to_string_url(&form.to_value()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RequestParams {
    pub url: String,
    pub body: Option<Payload>,
    pub data_type: DataType,
    pub content_type: Option<String>,
}

impl RequestParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: None,
            data_type: DataType::default(),
            content_type: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(Payload::Value(body));
        self
    }

    pub fn with_form(mut self, form: FormData) -> Self {
        self.body = Some(Payload::Form(form));
        self
    }

    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Encoded(String),
    Form(FormData),
    Raw(Vec<u8>),
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Arbitrary request sent through [`Dispatcher::send_fetch`].
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub url: String,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl FetchRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::GET,
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }
}

// ============================================================================
// Outcome
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseData {
    /// `None` when the body was not valid JSON.
    Json(Option<Value>),
    Text(String),
}

/// Exactly one of these is produced per exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    Success(ResponseData),
    Failure,
}

impl RequestOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success(_))
    }

    pub fn data(&self) -> Option<&ResponseData> {
        match self {
            RequestOutcome::Success(data) => Some(data),
            RequestOutcome::Failure => None,
        }
    }
}

fn decode_response(data_type: DataType, body: String) -> ResponseData {
    match data_type {
        DataType::Json => ResponseData::Json(serde_json::from_str(&body).ok()),
        DataType::Text => ResponseData::Text(body),
    }
}

// ============================================================================
// Transport
// ============================================================================

/// Moves one request over the wire and reports the raw response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, DispatchError>;
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, DispatchError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

fn header_map(headers: &[(String, String)]) -> Result<HeaderMap, DispatchError> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| DispatchError::InvalidHeader(format!("{}: {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| DispatchError::InvalidHeader(format!("{}: {}", name.as_str(), e)))?;
        map.insert(name, value);
    }
    Ok(map)
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, DispatchError> {
        let headers = header_map(&request.headers)?;

        let builder = self.client.request(request.method, &request.url);
        let builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Encoded(text) => builder.body(text),
            RequestBody::Raw(bytes) => builder.body(bytes),
            RequestBody::Form(form) => builder.multipart(form.to_multipart()),
        };
        // Caller headers replace the multipart content type when both are set.
        let response = builder.headers(headers).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

pub struct Dispatcher<T: Transport> {
    transport: T,
    success_status: u16,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            success_status: STATUS_SUCCESS,
        }
    }

    pub fn with_success_status(mut self, status: u16) -> Self {
        self.success_status = status;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET with the body encoded into the query string.
    pub async fn send_get(&self, params: RequestParams) -> RequestOutcome {
        let query = params.body.as_ref().map(Payload::encode).unwrap_or_default();
        let request = HttpRequest {
            method: Method::GET,
            url: format!("{}?{}", params.url, query),
            headers: vec![requested_with()],
            body: RequestBody::Empty,
        };

        self.complete(request, params.data_type).await
    }

    /// POST with an urlencoded body.
    pub async fn send_post(&self, params: RequestParams) -> RequestOutcome {
        let body = params.body.as_ref().map(Payload::encode).unwrap_or_default();
        let request = HttpRequest {
            method: Method::POST,
            url: params.url,
            headers: vec![
                requested_with(),
                ("Content-type".to_string(), FORM_URLENCODED.to_string()),
            ],
            body: RequestBody::Encoded(body),
        };

        self.complete(request, params.data_type).await
    }

    /// POST with the body sent as-is; a form goes out as multipart.
    pub async fn send_form(&self, params: RequestParams) -> RequestOutcome {
        let mut headers = vec![requested_with()];
        if let Some(content_type) = &params.content_type {
            headers.push(("Content-Type".to_string(), content_type.clone()));
        }

        let body = match params.body {
            Some(Payload::Form(form)) => RequestBody::Form(form),
            Some(Payload::Value(value)) => RequestBody::Raw(value.to_string().into_bytes()),
            None => RequestBody::Empty,
        };

        let request = HttpRequest {
            method: Method::POST,
            url: params.url,
            headers,
            body,
        };

        self.complete(request, params.data_type).await
    }

    /// Sends a caller-built request and returns the raw response.
    pub async fn send_fetch(&self, fetch: FetchRequest) -> Result<HttpResponse, DispatchError> {
        let mut headers = fetch.headers;
        if !headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case(REQUESTED_WITH_HEADER))
        {
            headers.push((
                REQUESTED_WITH_HEADER.to_lowercase(),
                REQUESTED_WITH_VALUE.to_string(),
            ));
        }

        debug!(method = %fetch.method, url = %fetch.url, "Dispatching fetch");
        self.transport
            .execute(HttpRequest {
                method: fetch.method,
                url: fetch.url,
                headers,
                body: fetch.body,
            })
            .await
    }

    async fn complete(&self, request: HttpRequest, data_type: DataType) -> RequestOutcome {
        debug!(method = %request.method, url = %request.url, "Dispatching request");

        match self.transport.execute(request).await {
            Ok(response) if response.status == self.success_status => {
                RequestOutcome::Success(decode_response(data_type, response.body))
            }
            Ok(response) => {
                warn!(status = response.status, "Request finished with non-success status");
                RequestOutcome::Failure
            }
            Err(e) => {
                warn!(error = %e, "Request failed");
                RequestOutcome::Failure
            }
        }
    }
}

fn requested_with() -> (String, String) {
    (
        REQUESTED_WITH_HEADER.to_string(),
        REQUESTED_WITH_VALUE.to_string(),
    )
}
