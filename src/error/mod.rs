mod constants;
mod db;

pub use constants::*;
pub use db::*;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::{BufMut, Bytes, BytesMut};
use sea_orm::DbErr;
use serde_json::json;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    status: StatusCode,
    code: u16,
    message: Cow<'static, str>,
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl Error {
    #[inline]
    const fn new(status: StatusCode, code: u16, message: &'static str) -> Error {
        Self {
            status,
            code,
            message: Cow::Borrowed(message),
        }
    }

    /// Same error kind with a message built at runtime.
    #[inline]
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Error {
        Self {
            message: message.into(),
            ..self
        }
    }

    #[inline]
    pub const fn code(&self) -> u16 {
        self.code
    }

    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(128).writer();

        serde_json::to_writer(&mut buf, &json!({ "error": self.message() }))
            .expect("failed to serialize error");

        buf.into_inner().freeze()
    }
}

impl IntoResponse for Error {
    #[inline]
    fn into_response(self) -> Response {
        debug!(code = self.code, status = %self.status, "{}", self.message);

        let buf = self.to_bytes();
        let mut res = (self.status, buf).into_response();

        res.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        );

        res
    }
}

impl From<DbErr> for Error {
    #[inline]
    fn from(error: DbErr) -> Self {
        error!("database error: {:?}", error);
        constants::DATABASE_ERROR
    }
}

macro_rules! const_error {
    ($(#[$meta:meta])* $name:ident, $status:ident, $code:literal, $msg:literal) => {
        $(#[$meta])*
        pub const $name: $crate::error::Error =
            $crate::error::Error::new(::axum::http::StatusCode::$status, $code, $msg);
    };
}

#[allow(clippy::useless_attribute)]
#[allow(clippy::needless_pub_self)]
pub(self) use const_error;
