use std::io::IsTerminal;

use log::LevelFilter;

/// Runtime settings for one simulator session.
///
/// There is no external configuration surface; the binary uses
/// [`SimConfig::default`] and tests pin the seed and disable colour.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Seed for the perturbation RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Write styled output (only sensible on a terminal).
    pub color: bool,
    pub log_level: LevelFilter,
}

#[cfg(test)]
impl SimConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            color: std::io::stdout().is_terminal(),
            log_level: LevelFilter::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_override_defaults() {
        let config = SimConfig::default().with_seed(7).with_color(false);
        assert_eq!(config.seed, Some(7));
        assert!(!config.color);
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
