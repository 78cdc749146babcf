use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::ACCEPT, request::Parts, HeaderMap, Method},
};
use headers::{ContentType, HeaderMapExt};
use mime::Mime;
use std::convert::Infallible;

/// Representation chosen for endpoints that serve both browsers and API clients.
///
/// JSON is picked when the request is a `POST`, sends a JSON body, or asks for
/// JSON without also accepting HTML. Everything else gets the HTML page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Html,
    Json,
}

impl ResponseFormat {
    pub fn resolve(method: &Method, headers: &HeaderMap) -> Self {
        if method == Method::POST || sends_json(headers) || prefers_json(headers) {
            Self::Json
        } else {
            Self::Html
        }
    }
}

fn is_json(mime: &Mime) -> bool {
    mime.type_() == mime::APPLICATION
        && (mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON))
}

fn sends_json(headers: &HeaderMap) -> bool {
    headers
        .typed_get::<ContentType>()
        .map(Mime::from)
        .is_some_and(|mime| is_json(&mime))
}

fn prefers_json(headers: &HeaderMap) -> bool {
    let accepted = headers
        .get_all(ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .filter_map(|item| item.trim().parse::<Mime>().ok());

    let mut json = false;

    for mime in accepted {
        if mime.type_() == mime::TEXT && mime.subtype() == mime::HTML {
            return false;
        }

        json |= is_json(&mime);
    }

    json
}

#[async_trait]
impl<S> FromRequestParts<S> for ResponseFormat
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::resolve(&parts.method, &parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::CONTENT_TYPE, HeaderValue};

    fn headers(pairs: &[(axum::http::HeaderName, &'static str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();

        for (name, value) in pairs {
            headers.append(name.clone(), HeaderValue::from_static(value));
        }

        headers
    }

    #[test]
    fn plain_get_is_html() {
        assert_eq!(
            ResponseFormat::resolve(&Method::GET, &HeaderMap::new()),
            ResponseFormat::Html
        );
    }

    #[test]
    fn post_is_always_json() {
        let headers = headers(&[(ACCEPT, "text/html")]);

        assert_eq!(
            ResponseFormat::resolve(&Method::POST, &headers),
            ResponseFormat::Json
        );
    }

    #[test]
    fn json_content_type_is_json() {
        let headers = headers(&[(CONTENT_TYPE, "application/json; charset=utf-8")]);

        assert_eq!(
            ResponseFormat::resolve(&Method::GET, &headers),
            ResponseFormat::Json
        );
    }

    #[test]
    fn json_accept_is_json() {
        let headers = headers(&[(ACCEPT, "application/json")]);

        assert_eq!(
            ResponseFormat::resolve(&Method::GET, &headers),
            ResponseFormat::Json
        );
    }

    #[test]
    fn browser_accept_is_html() {
        let headers = headers(&[(
            ACCEPT,
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )]);

        assert_eq!(
            ResponseFormat::resolve(&Method::GET, &headers),
            ResponseFormat::Html
        );
    }
}
