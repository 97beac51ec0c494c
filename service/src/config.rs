use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use std::fmt;
use std::str::FromStr;

/// Default watsonx.ai endpoint used when `WATSONX_URL` is not set.
pub const DEFAULT_WATSONX_URL: &str = "https://us-south.ml.cloud.ibm.com";

#[derive(Clone, Debug, PartialEq)]
pub enum RustEnv {
    Development,
    Production,
    Staging,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RustEnvParseError;

impl FromStr for RustEnv {
    type Err = RustEnvParseError;
    fn from_str(level: &str) -> Result<RustEnv, Self::Err> {
        match level.to_lowercase().as_str() {
            "development" => Ok(RustEnv::Development),
            "production" => Ok(RustEnv::Production),
            "staging" => Ok(RustEnv::Staging),
            _ => Err(RustEnvParseError),
        }
    }
}

impl fmt::Display for RustEnv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RustEnv::Development => write!(f, "development"),
            RustEnv::Production => write!(f, "production"),
            RustEnv::Staging => write!(f, "staging"),
        }
    }
}

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Path to a transcript text file to summarize. When omitted, the
    /// transcription provider supplies the transcript (demo data in mock
    /// mode).
    #[arg(short, long, env)]
    transcript: Option<String>,

    /// Reference to a meeting recording for the transcription provider
    /// (file path or media URL).
    #[arg(long, env)]
    audio: Option<String>,

    /// The watsonx.ai API key used for summarization calls.
    #[arg(long, env)]
    watsonx_api_key: Option<String>,

    /// The watsonx.ai project to bill generation requests against.
    #[arg(long, env)]
    watsonx_project_id: Option<String>,

    /// The base URL of the watsonx.ai API.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_WATSONX_URL)]
    watsonx_url: String,

    /// Force canned demo data instead of calling the real provider.
    #[arg(long, env, default_value_t = false)]
    mock_mode: bool,

    /// Export format for the enriched summary.
    #[arg(
        short = 'f',
        long,
        env,
        default_value = "text",
        value_parser = clap::builder::PossibleValuesParser::new(["text", "markdown", "json"])
            .map(|s| s.parse::<String>().unwrap()),
        )]
    pub export_format: String,

    /// Write the export to this file instead of stdout.
    #[arg(short, long, env)]
    output: Option<String>,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,

    /// Set the Rust runtime environment to use.
    #[arg(
    short,
    long,
    env,
    default_value_t = RustEnv::Development,
    value_parser = clap::builder::PossibleValuesParser::new([
        "DEVELOPMENT", "PRODUCTION", "STAGING",
        "development", "production", "staging"
    ])
        .map(|s| s.parse::<RustEnv>().unwrap()),
    )]
    pub runtime_env: RustEnv,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    /// Returns the transcript file path, if one was given.
    pub fn transcript_path(&self) -> Option<String> {
        self.transcript.clone()
    }

    /// Returns the audio reference for the transcription provider.
    pub fn audio_ref(&self) -> Option<String> {
        self.audio.clone()
    }

    /// Returns the watsonx.ai API key, if configured.
    pub fn watsonx_api_key(&self) -> Option<String> {
        self.watsonx_api_key.clone()
    }

    /// Returns the watsonx.ai project id, if configured.
    pub fn watsonx_project_id(&self) -> Option<String> {
        self.watsonx_project_id.clone()
    }

    /// Returns the watsonx.ai API base URL.
    pub fn watsonx_url(&self) -> &str {
        &self.watsonx_url
    }

    /// Returns the output file path, if one was given.
    pub fn output_path(&self) -> Option<String> {
        self.output.clone()
    }

    /// True when demo data should be used instead of the real provider:
    /// either forced by flag, or because no credentials are configured.
    pub fn is_mock_mode(&self) -> bool {
        self.mock_mode || self.watsonx_api_key.is_none() || self.watsonx_project_id.is_none()
    }

    pub fn runtime_env(&self) -> RustEnv {
        self.runtime_env.clone()
    }

    pub fn is_production(&self) -> bool {
        self.runtime_env() == RustEnv::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::parse_from(std::iter::once("meeting_assistant_rs").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults_select_mock_mode() {
        let config = parse(&[]);

        assert!(config.is_mock_mode());
        assert_eq!(config.export_format, "text");
        assert_eq!(config.watsonx_url(), DEFAULT_WATSONX_URL);
    }

    #[test]
    fn test_credentials_disable_mock_mode() {
        let config = parse(&[
            "--watsonx-api-key",
            "key",
            "--watsonx-project-id",
            "project",
        ]);

        assert!(!config.is_mock_mode());
    }

    #[test]
    fn test_mock_mode_flag_overrides_credentials() {
        let config = parse(&[
            "--watsonx-api-key",
            "key",
            "--watsonx-project-id",
            "project",
            "--mock-mode",
        ]);

        assert!(config.is_mock_mode());
    }

    #[test]
    fn test_runtime_env_parses_case_insensitively() {
        assert_eq!("PRODUCTION".parse::<RustEnv>(), Ok(RustEnv::Production));
        assert_eq!("staging".parse::<RustEnv>(), Ok(RustEnv::Staging));
        assert!("qa".parse::<RustEnv>().is_err());
    }
}
