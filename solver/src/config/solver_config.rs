use serde::{Deserialize, Serialize};
use tictactoe_common::tictactoe::{BoardNotation, BotType, Player};

use super::{Validate, YamlConfigStore};

const CONFIG_FILE_NAME: &str = "tictactoe_solver_config.yaml";

pub fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn open_config_store(path: Option<&str>) -> YamlConfigStore<SolverConfig> {
    match path {
        Some(path) => YamlConfigStore::new(path),
        None => YamlConfigStore::new(default_config_path()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default)]
    pub notation: BoardNotation,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub self_play: SelfPlayConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Score root moves on the rayon pool instead of one by one.
    pub parallel_root: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    pub first_player: Player,
    pub opponent_bot: BotType,
    pub seed: Option<u64>,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            first_player: Player::Opponent,
            opponent_bot: BotType::Random,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub verbose: bool,
    pub use_prefix: bool,
}

impl Validate for SolverConfig {
    fn validate(&self) -> Result<(), String> {
        self.notation.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_solver_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_missing_file_loads_default() {
        let store = open_config_store(Some(&get_temp_file_path()));
        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), SolverConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = get_temp_file_path();
        let store = open_config_store(Some(&path));

        let mut config = SolverConfig::default();
        config.notation.me = 'M';
        config.notation.opponent = 'H';
        config.search.parallel_root = true;
        config.self_play.first_player = Player::Me;
        config.self_play.opponent_bot = BotType::Minimax;
        config.self_play.seed = Some(99);

        store.save(&config).unwrap();
        assert_eq!(store.load().unwrap(), config);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = get_temp_file_path();
        std::fs::write(&path, "search:\n  parallel_root: true\n").unwrap();

        let config = open_config_store(Some(&path)).load().unwrap();
        assert!(config.search.parallel_root);
        assert_eq!(config.notation, BoardNotation::default());
        assert_eq!(config.self_play, SelfPlayConfig::default());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let path = get_temp_file_path();
        std::fs::write(&path, "self_play:\n  seed: 7\nlog:\n  use_prefix: true\n").unwrap();

        let config = open_config_store(Some(&path)).load().unwrap();
        assert_eq!(config.self_play.seed, Some(7));
        assert_eq!(config.self_play.first_player, Player::Opponent);
        assert_eq!(config.self_play.opponent_bot, BotType::Random);
        assert!(config.log.use_prefix);
        assert!(!config.log.verbose);
        assert_eq!(config.search, SearchConfig::default());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_invalid_notation_rejected() {
        let path = get_temp_file_path();
        std::fs::write(&path, "notation:\n  me: X\n  opponent: X\n  empty: .\n").unwrap();

        let result = open_config_store(Some(&path)).load();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        std::fs::remove_file(&path).unwrap();

        let mut config = SolverConfig::default();
        config.notation.empty = config.notation.me;
        assert!(matches!(
            open_config_store(Some(&path)).save(&config),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let path = get_temp_file_path();
        std::fs::write(&path, "self_play:\n  first_player: nobody\n").unwrap();

        let result = open_config_store(Some(&path)).load();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));

        std::fs::remove_file(&path).unwrap();
    }
}
