use super::request::RequestBuilder;
use cafe_api::{Config, State};
use http::StatusCode;
use migration::MigratorTrait;
use reqwest::Client;
use sea_orm::{ConnectOptions, Database, DbConn};
use serde_json::{json, Value};
use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};
use tokio::net::TcpListener;

pub const API_KEY: &str = "test-api-key";

async fn setup_database() -> DbConn {
    // a single pooled connection keeps the in-memory database alive and shared
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1).min_connections(1);

    let db = Database::connect(opts)
        .await
        .expect("failed to connect to database");

    migration::Migrator::fresh(&db)
        .await
        .expect("failed to apply migrations");

    db
}

async fn setup_backend(config: Config, db: DbConn) -> SocketAddr {
    let listener = TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
        .await
        .expect("failed to bind tcp listener");
    let state = State::with_database(config, db);

    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        cafe_api::run(listener, state).await.unwrap();
    });

    addr
}

pub async fn setup() -> App {
    setup_with_api_key(Some(API_KEY)).await
}

pub async fn setup_with_api_key(api_key: Option<&str>) -> App {
    let config = Config {
        database_url: "sqlite::memory:".to_owned(),
        api_key: api_key.map(Arc::from),
        port: 0,
    };

    let db = setup_database().await;
    let addr = setup_backend(config, db.clone()).await;

    App {
        addr,
        client: Client::new(),
        db,
    }
}

#[derive(Clone)]
pub struct App {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DbConn,
}

#[allow(unused)]
impl App {
    fn get_url(&self, url: &str) -> String {
        format!("http://{}{}", self.addr, url)
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.get_url(url)))
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.get_url(url)))
    }

    pub fn patch(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.patch(self.get_url(url)))
    }

    pub fn delete(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.delete(self.get_url(url)))
    }

    /// Request body for a cafe that passes validation.
    pub fn cafe_payload(name: &str, location: &str) -> Value {
        json!({
            "name": name,
            "map_url": format!("https://maps.example.com/?q={}", name.replace(' ', "+")),
            "img_url": "https://images.example.com/cafe.jpg",
            "location": location,
            "seats": "20-30",
            "has_toilet": true,
            "has_wifi": true,
            "has_sockets": false,
            "can_take_calls": true,
            "coffee_price": "£2.80",
        })
    }

    pub async fn create_cafe(&self, name: &str, location: &str) -> Value {
        let res = self
            .post("/create")
            .json(&Self::cafe_payload(name, location))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        res.json().await
    }
}
