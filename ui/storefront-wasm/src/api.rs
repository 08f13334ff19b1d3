//! HTTP client for the cart endpoints.
//!
//! The CSRF token is read once at start and injected here; every request
//! this client issues is a mutating POST that carries it.

use gloo_net::http::{Request, RequestBuilder, Response};
use sf_api_types::{CsrfToken, FORM_CONTENT_TYPE, FormBody, RequestOutcome};
use web_sys::FormData;

#[derive(Debug)]
pub struct CartClient {
    csrf: Option<CsrfToken>,
    csrf_header: String,
}

impl CartClient {
    pub fn new(csrf: Option<CsrfToken>, csrf_header: impl Into<String>) -> Self {
        Self {
            csrf,
            csrf_header: csrf_header.into(),
        }
    }

    fn post(&self, url: &str) -> RequestBuilder {
        let builder = Request::post(url);
        match &self.csrf {
            Some(token) => builder.header(&self.csrf_header, token.as_str()),
            None => builder,
        }
    }

    /// POST an `application/x-www-form-urlencoded` body.
    pub async fn post_form<B: FormBody>(&self, url: &str, body: &B) -> RequestOutcome {
        let request = self
            .post(url)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(body.encode());
        match request {
            Ok(req) => settle(req.send().await).await,
            Err(e) => RequestOutcome::Failed(e.to_string()),
        }
    }

    /// POST a multipart body built from a page form.
    pub async fn post_form_data(&self, url: &str, data: &FormData) -> RequestOutcome {
        match self.post(url).body(data.clone()) {
            Ok(req) => settle(req.send().await).await,
            Err(e) => RequestOutcome::Failed(e.to_string()),
        }
    }
}

async fn settle(result: Result<Response, gloo_net::Error>) -> RequestOutcome {
    match result {
        Ok(resp) => {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            RequestOutcome::from_status(status, body)
        }
        Err(e) => RequestOutcome::Failed(e.to_string()),
    }
}
