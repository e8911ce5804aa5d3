use clap::Parser;
use menulens_core::domain::common::{
    GooglePlacesConfig, LLMConfig, MenuLensConfig, YelpConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "menulens-api",
    version,
    about = "Menu parsing and restaurant lookup API",
    args_override_self = true
)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub yelp: YelpArgs,

    #[command(flatten)]
    pub google_places: GooglePlacesArgs,

    #[command(flatten)]
    pub log: LogArgs,

    /// Timeout for Yelp and Google Places requests, in seconds
    #[arg(long, env = "THIRD_PARTY_TIMEOUT_SECS", default_value_t = 10)]
    pub third_party_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix for every route, e.g. "/menulens"
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_model: String,

    #[arg(
        long,
        env = "GEMINI_API_BASE",
        default_value = "https://generativelanguage.googleapis.com/v1beta"
    )]
    pub gemini_api_base: String,

    #[arg(long, env = "GEMINI_TIMEOUT_SECS", default_value_t = 60)]
    pub gemini_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct YelpArgs {
    #[arg(long, env = "YELP_API_KEY", hide_env_values = true)]
    pub yelp_api_key: Option<String>,

    #[arg(long, env = "YELP_API_BASE", default_value = "https://api.yelp.com/v3")]
    pub yelp_api_base: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct GooglePlacesArgs {
    #[arg(long, env = "GOOGLE_PLACES_API_KEY", hide_env_values = true)]
    pub google_places_api_key: Option<String>,

    #[arg(
        long,
        env = "GOOGLE_PLACES_API_BASE",
        default_value = "https://maps.googleapis.com/maps/api"
    )]
    pub google_places_api_base: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Tracing filter directives, e.g. "info,menulens_core=debug"
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    /// Emit logs as JSON lines
    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for MenuLensConfig {
    fn from(args: Args) -> Self {
        MenuLensConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_api_base: args.llm.gemini_api_base,
                request_timeout_secs: args.llm.gemini_timeout_secs,
            },
            yelp: YelpConfig {
                api_key: args.yelp.yelp_api_key,
                api_base: args.yelp.yelp_api_base,
                request_timeout_secs: args.third_party_timeout_secs,
            },
            google_places: GooglePlacesConfig {
                api_key: args.google_places.google_places_api_key,
                api_base: args.google_places.google_places_api_base,
                request_timeout_secs: args.third_party_timeout_secs,
            },
        }
    }
}
