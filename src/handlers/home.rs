use crate::pages;
use axum::response::Html;

pub async fn home() -> Html<String> {
    pages::render(&[])
}
