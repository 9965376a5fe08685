//! Game configuration fixed at session start.
//!
//! Defaults follow the classic 5x5 board with a one-in-four chance of each
//! light starting on. Values can be overridden from the command line.

use super::error::{GameError, GameResult};

pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLS: usize = 5;
pub const DEFAULT_LIGHT_PROBABILITY: f64 = 0.25;

/// Immutable per-session configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Independent chance that each cell starts lit
    pub light_probability: f64,
    /// Seed for reproducible boards; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            light_probability: DEFAULT_LIGHT_PROBABILITY,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_light_probability(mut self, light_probability: f64) -> Self {
        self.light_probability = light_probability;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configurations no game can start from
    pub fn validate(&self) -> GameResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::InvalidConfig(format!(
                "board dimensions must be positive, got {}x{}",
                self.rows, self.cols
            )));
        }
        if !(0.0..=1.0).contains(&self.light_probability) {
            return Err(GameError::InvalidConfig(format!(
                "light probability must be within [0, 1], got {}",
                self.light_probability
            )));
        }
        Ok(())
    }

    /// Parse `--rows N --cols N --chance P --seed S` on top of the defaults.
    /// Returns `Ok(None)` when `--help` was requested.
    pub fn from_args<I, S>(args: I) -> GameResult<Option<Self>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let flag = arg.as_ref().to_string();
            if matches!(flag.as_str(), "-h" | "--help") {
                return Ok(None);
            }

            let value = args
                .next()
                .ok_or_else(|| GameError::InvalidConfig(format!("missing value for {}", flag)))?;
            let value = value.as_ref();

            match flag.as_str() {
                "--rows" => config.rows = parse_value(&flag, value)?,
                "--cols" => config.cols = parse_value(&flag, value)?,
                "--chance" => config.light_probability = parse_value(&flag, value)?,
                "--seed" => config.seed = Some(parse_value(&flag, value)?),
                _ => {
                    return Err(GameError::InvalidConfig(format!(
                        "unknown argument {}",
                        flag
                    )));
                }
            }
        }

        config.validate()?;
        Ok(Some(config))
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: &str) -> GameResult<T> {
    value
        .parse()
        .map_err(|_| GameError::InvalidConfig(format!("bad value {:?} for {}", value, flag)))
}

/// Usage text printed for `--help`
pub const USAGE: &str = "\
Usage: lights_out [--rows N] [--cols N] [--chance P] [--seed S]

  --rows N     board rows (default 5)
  --cols N     board columns (default 5)
  --chance P   probability each light starts on, 0..=1 (default 0.25)
  --seed S     seed for a reproducible sequence of boards";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.rows, 5);
        assert_eq!(config.cols, 5);
        assert_eq!(config.light_probability, 0.25);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let config = GameConfig::default().with_dimensions(0, 5);
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        let config = GameConfig::default().with_dimensions(5, 0);
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_probability_range() {
        for p in [0.0, 0.5, 1.0] {
            assert!(GameConfig::default().with_light_probability(p).validate().is_ok());
        }
        for p in [-0.01, 1.01, f64::NAN, f64::INFINITY] {
            let config = GameConfig::default().with_light_probability(p);
            assert!(config.validate().is_err(), "probability {} accepted", p);
        }
    }

    #[test]
    fn test_from_args_overrides_defaults() {
        let config = GameConfig::from_args(["--rows", "3", "--chance", "0.5", "--seed", "42"])
            .unwrap()
            .unwrap();
        assert_eq!(config.rows, 3);
        assert_eq!(config.cols, 5);
        assert_eq!(config.light_probability, 0.5);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_from_args_empty_gives_default() {
        let config = GameConfig::from_args(Vec::<String>::new()).unwrap().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_from_args_help() {
        assert_eq!(GameConfig::from_args(["--help"]).unwrap(), None);
    }

    #[test]
    fn test_from_args_errors() {
        assert!(GameConfig::from_args(["--rows"]).is_err());
        assert!(GameConfig::from_args(["--rows", "five"]).is_err());
        assert!(GameConfig::from_args(["--size", "5"]).is_err());
        assert!(GameConfig::from_args(["--chance", "2"]).is_err());
        assert!(GameConfig::from_args(["--cols", "0"]).is_err());
    }
}
