use crate::config;
use eyre::WrapErr;
use reqwest::{blocking::Request, StatusCode};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// One request against the judge; the token is supplied separately so that
/// a `Call` can be logged freely.
#[derive(Debug, Clone)]
pub struct Call {
    pub method: Method,
    pub url: Url,
    pub form: Option<Vec<(String, String)>>,
}

impl Call {
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::Get,
            url,
            form: None,
        }
    }

    pub fn post_form(url: Url, form: Vec<(String, String)>) -> Self {
        Self {
            method: Method::Post,
            url,
            form: Some(form),
        }
    }
}

#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub url: Url,
    pub body: String,
}

/// Performs a single already-built request, without retries.
pub trait Transport {
    fn send(&self, request: Request) -> eyre::Result<Reply>;
}

impl Transport for reqwest::blocking::Client {
    #[culpa::try_fn]
    #[tracing::instrument(skip_all, fields(method = %request.method(), url = %request.url()))]
    fn send(&self, request: Request) -> eyre::Result<Reply> {
        let response = self.execute(request)?;
        let status = response.status();
        let url = response.url().clone();
        let body = response.text()?;
        tracing::debug!(%status, body_len = body.len(), "received response");
        Reply { status, url, body }
    }
}

#[derive(Debug)]
pub struct Caller<T = reqwest::blocking::Client> {
    http: reqwest::blocking::Client,
    transport: T,
}

impl Caller {
    #[culpa::try_fn]
    pub fn new() -> eyre::Result<Self> {
        let http = http_client()?;
        Self {
            transport: http.clone(),
            http,
        }
    }
}

#[culpa::try_fn]
fn http_client() -> eyre::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(config::REQUEST_TIMEOUT)
        .build()?
}

impl<T: Transport> Caller<T> {
    #[culpa::try_fn]
    pub fn with_transport(transport: T) -> eyre::Result<Self> {
        Self {
            http: http_client()?,
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[culpa::try_fn]
    pub fn request(&self, call: &Call, token: &str) -> eyre::Result<Request> {
        let mut builder = self
            .http
            .request(call.method.into(), call.url.clone())
            .bearer_auth(token)
            .timeout(config::REQUEST_TIMEOUT);
        if let Some(form) = &call.form {
            builder = builder.form(form);
        }
        builder.build()?
    }

    /// Issues `call` and parses the body of a successful reply as JSON,
    /// returning the document untouched.
    #[culpa::try_fn]
    #[tracing::instrument(skip_all, fields(method = %call.method, url = %call.url))]
    pub fn call(&self, call: &Call, token: &str) -> eyre::Result<serde_json::Value> {
        let request = self.request(call, token)?;
        let reply = self.transport.send(request)?;
        check_status(&reply)?;
        let value =
            serde_json::from_str(&reply.body).wrap_err("response body is not valid JSON")?;
        tracing::info!(status = %reply.status, "call succeeded");
        value
    }
}

fn check_status(reply: &Reply) -> eyre::Result<()> {
    if reply.status.is_success() {
        return Ok(());
    }
    let kind = if reply.status.is_client_error() {
        "client error"
    } else if reply.status.is_server_error() {
        "server error"
    } else {
        "unexpected"
    };
    Err(eyre::eyre!(
        "HTTP status {kind} ({}) for url ({})",
        reply.status,
        reply.url,
    ))
}
