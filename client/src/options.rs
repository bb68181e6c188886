use anyhow::{anyhow, Context, Result};
use common::Config;
use mcts::DEFAULT_EXPLORATION;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Random,
    AlphaBeta,
    Mcts,
    Human,
}

impl FromStr for PlayerKind {
    type Err = anyhow::Error;

    fn from_str(kind: &str) -> Result<Self> {
        match kind.to_lowercase().as_str() {
            "random" => Ok(PlayerKind::Random),
            "alphabeta" => Ok(PlayerKind::AlphaBeta),
            "mcts" => Ok(PlayerKind::Mcts),
            "human" => Ok(PlayerKind::Human),
            _ => Err(anyhow!(
                "Unknown player kind '{}', expected one of random, alphabeta, mcts or human",
                kind
            )),
        }
    }
}

#[derive(Debug)]
pub struct PlayerOptions {
    pub name: String,
    pub kind: PlayerKind,
    pub depth: usize,
    pub time_limit: Duration,
    pub max_playout_depth: Option<usize>,
    pub exploration: f32,
    pub seed: Option<u64>,
}

impl Config for PlayerOptions {
    fn load(config: &common::ConfigLoader) -> Result<Self> {
        let kind = config
            .get("kind")
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| "random".to_string());

        let time_limit_secs = config
            .get("time_limit_secs")
            .and_then(|v| v.as_f32())
            .unwrap_or(1.0);
        let time_limit = Duration::try_from_secs_f32(time_limit_secs).with_context(|| {
            format!(
                "time_limit_secs must be a non-negative number of seconds, found: {}",
                time_limit_secs
            )
        })?;

        Ok(Self {
            name: config
                .get("name")
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| format!("{}:{}", config.scope(), kind)),
            kind: kind.parse()?,
            depth: config
                .get("depth")
                .and_then(|v| v.as_usize())
                .unwrap_or(3),
            time_limit,
            max_playout_depth: config.get("max_playout_depth").and_then(|v| v.as_usize()),
            exploration: config
                .get("exploration")
                .and_then(|v| v.as_f32())
                .unwrap_or(DEFAULT_EXPLORATION),
            seed: config.get("seed").and_then(|v| v.as_u64()),
        })
    }
}

#[derive(Debug)]
pub struct DraughtsOptions {
    pub max_ply: usize,
}

impl Config for DraughtsOptions {
    fn load(config: &common::ConfigLoader) -> Result<Self> {
        Ok(Self {
            max_ply: config
                .get("max_ply")
                .and_then(|v| v.as_usize())
                .unwrap_or(draughts::DEFAULT_MAX_PLY),
        })
    }
}
