use actix_web::web;
use portfolio_site::{
    build_server,
    db::sqlite::{create_pool, init_schema},
    settings::{AppConfig, AppEnvironment},
    AppState,
};
use reqwest::{redirect::Policy, Client, Response};
use sqlx::SqlitePool;
use std::{net::TcpListener, path::PathBuf, time::Duration};
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub db_pool: SqlitePool,
    pub client: Client,
    #[allow(dead_code)]
    pub state: web::Data<AppState>,
    #[allow(dead_code)]
    pub config: AppConfig,
    db_path: PathBuf,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db_path = std::env::temp_dir().join(format!("portfolio-test-{}.db", Uuid::new_v4()));
        let config = test_config(&db_path);

        let db_pool = create_pool(&config.database_url, config.max_connections)
            .await
            .expect("Failed to create test DB pool");

        init_schema(&db_pool)
            .await
            .expect("Failed to initialize schema");

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let state = web::Data::new(AppState::new(&config, db_pool.clone()));
        let server = build_server(state.clone(), listener, config.worker_count)
            .expect("Failed to bind server");

        tokio::spawn(server);

        // Redirects stay visible to the tests; cookies persist like a browser.
        let client = Client::builder()
            .redirect(Policy::none())
            .cookie_store(true)
            .build()
            .expect("Failed to build client");

        while client.get(format!("{}/about", address)).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self {
            address,
            db_pool,
            client,
            state,
            config,
            db_path,
        }
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute GET")
    }

    pub async fn get_html(&self, path: &str) -> String {
        let response = self.get(path).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK, "GET {path}");
        response.text().await.expect("Failed to read body")
    }

    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .form(fields)
            .send()
            .await
            .expect("Failed to execute POST")
    }

    #[allow(dead_code)]
    pub async fn add_project(&self, title: &str) -> Response {
        self.post_form(
            "/projects/add",
            &[("title", title), ("description", "desc"), ("details", "details"), ("url", "")],
        )
        .await
    }

    #[allow(dead_code)]
    pub async fn add_post(&self, title: &str, content: &str) -> Response {
        self.post_form("/blog/add", &[("title", title), ("content", content)]).await
    }

    #[allow(dead_code)]
    pub async fn max_id(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT MAX(id) FROM {table}"))
            .fetch_one(&self.db_pool)
            .await
            .unwrap()
    }

    pub async fn cleanup_test_db(&self) {
        self.db_pool.close().await;
        let _ = std::fs::remove_file(&self.db_path);
    }
}

fn test_config(db_path: &std::path::Path) -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Portfolio Test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        worker_count: 1,
        database_url: format!("sqlite://{}", db_path.display()),
        max_connections: 4,
        log_level: "warn".to_string(),
        json_logs: false,
        site_owner: "Test Owner".to_string(),
    }
}

#[allow(dead_code)]
pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}
