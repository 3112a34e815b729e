use std::sync::Arc;

use account_service::domain::account::ports::AccountServicePort;
use account_service::domain::account::service::AccountService;
use account_service::inbound::http::router::create_router;
use account_service::outbound::repositories::InMemoryAccountRepository;
use auth::Authenticator;
use auth::TokenCodec;

/// Signing key shared between the spawned app and the tests, so tests can
/// mint their own tokens (expired ones included).
pub const TEST_TOKEN_SECRET: &[u8] = b"test-secret-key-for-token-signing-32-bytes";

pub const TEST_PASSWORD: &str = "Test1234!@#$";

/// Test application that spawns a real server on a random port.
///
/// Uses the in-memory repository as a deterministic store double; no
/// external services are required.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token_codec: TokenCodec,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryAccountRepository::new());
        let account_service: Arc<dyn AccountServicePort> =
            Arc::new(AccountService::new(repository));
        let authenticator = Arc::new(Authenticator::new(TEST_TOKEN_SECRET));

        let router = create_router(account_service, authenticator, 24);
        tokio::spawn(async move { axum::serve(listener, router).await });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_codec: TokenCodec::new(TEST_TOKEN_SECRET),
        }
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Sign up an account and return the created account body.
    pub async fn signup(&self, email: &str, display_name: &str) -> serde_json::Value {
        let response = self
            .post("/api/auth/signup")
            .json(&serde_json::json!({
                "email": email,
                "password": TEST_PASSWORD,
                "display_name": display_name
            }))
            .send()
            .await
            .expect("Failed to execute signup request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse signup body")
    }

    /// Log in and return the issued bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&serde_json::json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute login request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = response.json().await.expect("Failed to parse login body");
        body["token"]
            .as_str()
            .expect("Login response missing token")
            .to_string()
    }
}
