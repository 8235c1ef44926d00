//! Test harness with testcontainers for integration testing.
//!
//! Uses one shared Postgres container across all tests. The container and
//! migrations are initialized once on first use, then reused. Tests isolate
//! themselves by creating their own users and complexes.

use anyhow::{Context, Result};
use housing_core::common::UserId;
use housing_core::domains::auth::JwtService;
use housing_core::kernel::{MockFileStorage, ServerDeps, TestDependencies};
use housing_core::server::build_app;
use sqlx::PgPool;
use std::sync::Arc;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

use super::ApiClient;

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    db_url: String,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

/// Global shared infrastructure - initialized once, reused by all tests.
static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let postgres = Postgres::default()
            .with_tag("16")
            .with_cmd(["-c", "max_connections=200"])
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let pg_host = postgres.get_host().await?;
        let pg_port = postgres.get_host_port_ipv4(5432).await?;
        let db_url = format!(
            "postgresql://postgres:postgres@{}:{}/postgres",
            pg_host, pg_port
        );

        let pool = PgPool::connect(&db_url)
            .await
            .context("Failed to connect to Postgres for migrations")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self {
            db_url,
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }
}

/// Per-test context: a fresh pool, in-memory file storage and the app router.
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let owner = UserId::new();
///     let (status, body) = ctx.api().get("/api/complexes/mine", Some(&ctx.token_for(owner))).await;
/// }
/// ```
pub struct TestHarness {
    /// Database pool - use this for fixtures and assertions.
    pub db_pool: PgPool,
    /// Storage behind the app; inspect it to check stored and removed files.
    pub storage: Arc<MockFileStorage>,
    pub jwt_service: Arc<JwtService>,
    pub deps: ServerDeps,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await.expect("Failed to create test harness")
    }

    async fn teardown(self) {
        // Database pool is automatically dropped
    }
}

impl TestHarness {
    pub async fn new() -> Result<Self> {
        Self::with_dependencies(TestDependencies::new()).await
    }

    /// Harness whose app uses the given mocks.
    pub async fn with_dependencies(test_deps: TestDependencies) -> Result<Self> {
        let infra = SharedTestInfra::get().await;

        let db_pool = PgPool::connect(&infra.db_url)
            .await
            .context("Failed to connect to test database")?;

        let storage = test_deps.storage.clone();
        let jwt_service = test_deps.jwt_service.clone();
        let deps = test_deps.into_deps(db_pool.clone());

        Ok(Self {
            db_pool,
            storage,
            jwt_service,
            deps,
        })
    }

    /// In-process client for the full router.
    pub fn api(&self) -> ApiClient {
        ApiClient::new(build_app(self.deps.clone(), &[]))
    }

    /// Bearer token for `user_id`.
    pub fn token_for(&self, user_id: UserId) -> String {
        self.jwt_service
            .create_token(user_id, format!("{}@example.com", user_id))
            .expect("Failed to create test token")
    }
}
