use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    /// When unset, tokens are decoded without checking the signature.
    pub secret: Option<String>,
    pub issuer: Option<String>,
    pub audience: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionConfig {
    pub timezone: String,
    pub lookback_days: i64,
    pub recent_meals: usize,
    pub frequency_threshold: f64,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            timezone: "America/Los_Angeles".into(),
            lookback_days: 30,
            recent_meals: 20,
            frequency_threshold: 0.6,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub cors_allowed_origins: Vec<String>,
    pub jwt: JwtConfig,
    pub suggestions: SuggestionConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| parse_origins(&v))
            .unwrap_or_default();
        let jwt = JwtConfig {
            secret: non_empty_var("JWT_SECRET"),
            issuer: non_empty_var("JWT_ISSUER"),
            audience: non_empty_var("JWT_AUDIENCE"),
        };
        let defaults = SuggestionConfig::default();
        let suggestions = SuggestionConfig {
            timezone: non_empty_var("SUGGESTIONS_TIMEZONE").unwrap_or(defaults.timezone),
            lookback_days: parsed_var("SUGGESTIONS_LOOKBACK_DAYS").unwrap_or(defaults.lookback_days),
            recent_meals: parsed_var("SUGGESTIONS_RECENT_MEALS").unwrap_or(defaults.recent_meals),
            frequency_threshold: parsed_var("SUGGESTIONS_FREQUENCY_THRESHOLD")
                .unwrap_or(defaults.frequency_threshold),
        };
        Ok(Self {
            database_url,
            cors_allowed_origins,
            jwt,
            suggestions,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parsed_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}

/// Comma separated list; `*` or an empty value means any origin.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "*")
        .map(String::from)
        .collect()
}
