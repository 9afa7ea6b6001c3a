use std::time::Duration;

pub const DEFAULT_DASHBOARD_HOST: &str = "127.0.0.1";
pub const DEFAULT_DASHBOARD_PORT: u16 = 8080;
pub const MAX_SESSION_ID_LENGTH: usize = 64;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;
pub const SESSION_CLEANUP_INTERVAL_SECS: u64 = 300;
pub const SESSION_TTL_MINUTES: i64 = 60;

pub const CONFIG_DIR_NAME: &str = ".vertexpoint";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const CONFIG_PATH_ENV: &str = "VERTEXPOINT_CONFIG";
pub const WEBHOOK_URL_ENV: &str = "VERTEXPOINT_WEBHOOK_URL";

pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 2500;
pub const DEFAULT_CONSULTANT: &str = "Jose Serna Acevedo";

// Simulated metric ranges, lower bound inclusive and upper bound exclusive.
pub const SCORE_RANGE: (f64, f64) = (6.5, 9.2);
pub const LOAD_SPEED_RANGE_SECS: (f64, f64) = (0.8, 4.5);
pub const SEO_SCORE_RANGE: (u8, u8) = (75, 95);
pub const SCHEMA_DETECTION_PROBABILITY: f64 = 0.3;
pub const SHOPIFY_PROBABILITY: f64 = 0.5;

pub const LCP_METRIC: &str = "lcp";
pub const LCP_GOOD_UPPER_BOUND_SECS: f64 = 2.5;
pub const LCP_NEEDS_IMPROVEMENT_UPPER_BOUND_SECS: f64 = 4.0;

pub const SSL_STATUS: &str = "Active (TLS 1.3)";
pub const VALUE_PROPOSITION: &str = "Enfoque en exclusividad artesanal con validación social moderada.";
pub const COPY_TONE: &str = "Premium / Aspiracional";
pub const VIP_RECOMMENDATION: &str = "Reforzar el 'Unique Selling Proposition' (USP) en el primer pliegue (Above the fold).";
pub const JSON_LD_DETECTED: &str = "Product / Organization";
pub const JSON_LD_MISSING: &str = "None Detected";
pub const AEO_SCORE_DETECTED: u8 = 85;
pub const AEO_SCORE_MISSING: u8 = 42;
pub const IMPACT_LABEL_DETECTED: &str = "Alta visibilidad en motores de respuesta de IA (Perplexity/Gemini).";
pub const IMPACT_LABEL_MISSING: &str = "Baja visibilidad en motores de respuesta de IA (AEO). El sitio es invisible para agentes inteligentes.";
pub const REVENUE_PROJECTION: &str = "+7.4% - 10.2%";
pub const REVENUE_FACTOR: &str = "Optimización de LCP y recuperación de carritos vía IA";

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
