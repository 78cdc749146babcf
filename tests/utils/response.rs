use http::{HeaderValue, StatusCode};
use serde::de::DeserializeOwned;

#[derive(Debug)]
pub struct TestResponse {
    response: reqwest::Response,
}

#[allow(unused)]
impl TestResponse {
    pub(super) fn new(response: reqwest::Response) -> Self {
        TestResponse { response }
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        self.response
            .json()
            .await
            .expect("failed to deserialize to json")
    }

    pub async fn text(self) -> String {
        self.response.text().await.expect("failed to read body")
    }

    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    pub fn header(&self, name: impl AsRef<str>) -> Option<&HeaderValue> {
        self.response.headers().get(name.as_ref())
    }
}
