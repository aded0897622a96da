use serde::Serialize;

/// Runtime configuration, loaded once at startup from environment variables.
///
/// Secrets and connection strings live on this struct and stay server-side;
/// the `public` field is the only part that may be handed to clients.
///
/// Missing values are never an error at load time. A handler that needs an
/// absent secret fails when it first uses it (pool checkout, token
/// verification), not here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Display name of the application (`APP_TITLE`).
    pub app_name: Option<String>,
    /// HS256 secret used to sign and verify session tokens.
    pub jwt_secret: Option<String>,
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Outbound mail settings.
    pub smtp: SmtpConfig,
    /// S3-compatible object storage settings.
    pub s3: S3Config,
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Client-visible subset.
    pub public: PublicConfig,
}

/// SMTP relay credentials for outbound mail.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub pass: Option<String>,
    /// Use an implicit-TLS connection to the relay.
    pub secure: bool,
    pub from: Option<String>,
    /// Verify the relay's TLS certificate. On unless explicitly disabled.
    pub reject_unauthorized: bool,
}

/// Credentials for an S3-compatible object store.
#[derive(Debug, Clone)]
pub struct S3Config {
    pub endpoint: Option<String>,
    pub region: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub bucket_name: Option<String>,
}

/// Configuration safe to expose to browser clients.
///
/// Invariant: serializes to exactly `appName`, `nodeEnv` and `siteUrl`.
/// Never add a secret-bearing field here.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    pub app_name: Option<String>,
    pub node_env: String,
    pub site_url: String,
}

impl Config {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary lookup.
    ///
    /// Tests feed a map here instead of mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let app_name = lookup("APP_TITLE");

        Self {
            app_name: app_name.clone(),
            jwt_secret: lookup("JWT_SECRET"),
            database_url: lookup("DATABASE_URL"),
            smtp: SmtpConfig {
                host: lookup("SMTP_HOST"),
                port: lookup("SMTP_PORT").and_then(|v| v.parse().ok()),
                user: lookup("SMTP_USER"),
                pass: lookup("SMTP_PASS"),
                secure: flag(lookup("SMTP_SECURE"), false),
                from: lookup("SMTP_FROM"),
                reject_unauthorized: flag(lookup("SMTP_REJECT_UNAUTHORIZED"), true),
            },
            s3: S3Config {
                endpoint: lookup("S3_ENDPOINT"),
                region: lookup("S3_REGION"),
                access_key_id: lookup("S3_ACCESS_KEY_ID"),
                secret_access_key: lookup("S3_SECRET_ACCESS_KEY"),
                bucket_name: lookup("S3_BUCKET_NAME"),
            },
            port: lookup("PORT").and_then(|v| v.parse().ok()).unwrap_or(3000),
            public: PublicConfig {
                app_name,
                node_env: lookup("NODE_ENV").unwrap_or_else(|| "development".to_string()),
                site_url: lookup("NUXT_PUBLIC_SITE_URL")
                    .unwrap_or_else(|| "http://localhost:3000".to_string()),
            },
        }
    }
}

/// Lenient boolean coercion for env values.
fn flag(value: Option<String>, default: bool) -> bool {
    match value.as_deref() {
        Some(v) => matches!(v.to_ascii_lowercase().as_str(), "true" | "1" | "yes"),
        None => default,
    }
}
