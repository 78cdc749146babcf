//! Server-rendered page shown to browsers.

use crate::cafe::Cafe;
use axum::response::Html;
use std::fmt::Write;

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Cafe &amp; Wifi</title>
<style>
body { font-family: sans-serif; margin: 2rem auto; max-width: 60rem; padding: 0 1rem; }
.cafe { border: 1px solid #ddd; border-radius: 6px; margin-bottom: 1rem; padding: 1rem; }
.cafe img { max-width: 100%; border-radius: 4px; }
dl { display: grid; grid-template-columns: max-content auto; gap: .25rem 1rem; }
dt { font-weight: bold; }
</style>
</head>
<body>
<h1>Cafe &amp; Wifi</h1>
<nav><a href="/">Home</a> | <a href="/random">Random cafe</a> | <a href="/all">All cafes</a></nav>
"#;

const FOOT: &str = "</body>\n</html>\n";

pub fn render(cafes: &[Cafe]) -> Html<String> {
    let mut page = String::with_capacity(HEAD.len() + FOOT.len() + cafes.len() * 1024);
    page.push_str(HEAD);

    if cafes.is_empty() {
        page.push_str(
            "<p>Find a place to work from: browse <a href=\"/all\">every cafe</a> \
             or let us pick a <a href=\"/random\">random</a> one.</p>\n",
        );
    }

    for cafe in cafes {
        render_cafe(&mut page, cafe);
    }

    page.push_str(FOOT);

    Html(page)
}

fn render_cafe(page: &mut String, cafe: &Cafe) {
    // writing into a String cannot fail
    let _ = write!(
        page,
        r#"<article class="cafe">
<h2>{name}</h2>
<img src="{img_url}" alt="{name}">
<dl>
<dt>Location</dt><dd><a href="{map_url}">{location}</a></dd>
<dt>Seats</dt><dd>{seats}</dd>
<dt>Toilet</dt><dd>{has_toilet}</dd>
<dt>Wifi</dt><dd>{has_wifi}</dd>
<dt>Sockets</dt><dd>{has_sockets}</dd>
<dt>Can take calls</dt><dd>{can_take_calls}</dd>
<dt>Coffee price</dt><dd>{coffee_price}</dd>
</dl>
</article>
"#,
        name = escape(&cafe.name),
        img_url = escape(&cafe.img_url),
        map_url = escape(&cafe.map_url),
        location = escape(&cafe.location),
        seats = escape(&cafe.seats),
        has_toilet = yes_no(cafe.has_toilet),
        has_wifi = yes_no(cafe.has_wifi),
        has_sockets = yes_no(cafe.has_sockets),
        can_take_calls = yes_no(cafe.can_take_calls),
        coffee_price = cafe.coffee_price.as_deref().map_or_else(|| "unknown".to_owned(), escape),
    );
}

const fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }

    out
}
