use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Platform-style delivery tiers, fastest to slowest. `Fastest` means every
/// tick the source produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SamplingInterval {
    Fastest,
    #[default]
    Game,
    Ui,
    Normal,
}

impl SamplingInterval {
    pub const ALL: [SamplingInterval; 4] = [
        SamplingInterval::Fastest,
        SamplingInterval::Game,
        SamplingInterval::Ui,
        SamplingInterval::Normal,
    ];

    pub fn period(&self) -> Duration {
        match self {
            SamplingInterval::Fastest => Duration::ZERO,
            SamplingInterval::Game => Duration::from_micros(20_000),
            SamplingInterval::Ui => Duration::from_micros(66_667),
            SamplingInterval::Normal => Duration::from_micros(200_000),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SamplingInterval::Fastest => "Fastest",
            SamplingInterval::Game => "Game",
            SamplingInterval::Ui => "UI",
            SamplingInterval::Normal => "Normal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periods_increase_from_fastest_to_normal() {
        for pair in SamplingInterval::ALL.windows(2) {
            assert!(pair[0].period() < pair[1].period());
        }
    }

    #[test]
    fn game_is_the_default_tier() {
        assert_eq!(SamplingInterval::default(), SamplingInterval::Game);
    }
}
