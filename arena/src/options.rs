use anyhow::Result;
use common::Config;

#[derive(Debug)]
pub struct ArenaOptions {
    pub num_games: usize,
    pub view: bool,
}

impl Config for ArenaOptions {
    fn load(config: &common::ConfigLoader) -> Result<Self> {
        Ok(Self {
            num_games: config
                .get("num_games")
                .and_then(|v| v.as_usize())
                .unwrap_or(2),
            view: config
                .get("view")
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ConfigLoader;

    #[test]
    fn test_defaults() {
        let config = ConfigLoader::from_str("", "arena".to_string()).unwrap();
        let options: ArenaOptions = config.load().unwrap();

        assert_eq!(options.num_games, 2);
        assert!(!options.view);
    }

    #[test]
    fn test_scoped_values() {
        let config = ConfigLoader::from_str(
            "arena { num_games = 20, view = true }",
            "arena".to_string(),
        )
        .unwrap();
        let options: ArenaOptions = config.load().unwrap();

        assert_eq!(options.num_games, 20);
        assert!(options.view);
    }
}
