use crate::io_utils::read_text;
use domino_engine::engine::DEFAULT_TARGET_SCORE;
use domino_engine::player::HAND_SIZE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub target_score: u32,
    pub hand_size: usize,
    pub players: Vec<String>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub target_score: ValueSource,
    pub hand_size: ValueSource,
    pub players: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            target_score: ValueSource::Default,
            hand_size: ValueSource::Default,
            players: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            hand_size: HAND_SIZE,
            players: vec!["Player 1".into(), "Player 2".into()],
            seed: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves configuration: defaults, then the TOML file named by
/// `DOMINO_CONFIG`, then individual `DOMINO_*` environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("DOMINO_CONFIG")
        && !path.is_empty()
    {
        let s = read_text(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.target_score {
            cfg.target_score = v;
            sources.target_score = ValueSource::File;
        }
        if let Some(v) = f.hand_size {
            cfg.hand_size = v;
            sources.hand_size = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("DOMINO_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(target) = std::env::var("DOMINO_TARGET")
        && !target.is_empty()
    {
        cfg.target_score = target
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid target score".into()))?;
        sources.target_score = ValueSource::Env;
    }
    if let Ok(size) = std::env::var("DOMINO_HAND_SIZE")
        && !size.is_empty()
    {
        cfg.hand_size = size
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid hand size".into()))?;
        sources.hand_size = ValueSource::Env;
    }
    if let Ok(players) = std::env::var("DOMINO_PLAYERS")
        && !players.is_empty()
    {
        cfg.players = parse_player_list(&players);
        sources.players = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    target_score: Option<u32>,
    #[serde(default)]
    hand_size: Option<usize>,
    #[serde(default)]
    players: Option<Vec<String>>,
    #[serde(default)]
    seed: Option<u64>,
}

/// Splits a comma-separated roster, dropping blank names.
pub fn parse_player_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from)
        .collect()
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.target_score == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: target_score must be >0".into(),
        ));
    }
    if cfg.hand_size == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: hand_size must be >0".into(),
        ));
    }
    if cfg.players.len() < 2 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: at least 2 players required".into(),
        ));
    }
    Ok(())
}
