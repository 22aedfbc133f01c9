//! Randomized reforestation generators
//!
//! Both generators draw from a [`RandomSource`] so callers decide between real
//! entropy, a fixed seed, or a scripted sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform integer source
pub trait RandomSource {
    /// Uniform value in `[0, bound)`; `bound` is always > 0
    fn below(&mut self, bound: u32) -> u32;
}

/// `rand`-backed source, optionally seeded for reproducible sessions
pub struct RngSource {
    rng: StdRng,
}

impl RngSource {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl RandomSource for RngSource {
    fn below(&mut self, bound: u32) -> u32 {
        self.rng.gen_range(0..bound)
    }
}

/// Replays a fixed list of draws, each reduced modulo the requested bound
///
/// Once the script runs out it keeps returning 0.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct ScriptedRandom {
    draws: std::collections::VecDeque<u32>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn below(&mut self, bound: u32) -> u32 {
        self.draws.pop_front().unwrap_or(0) % bound
    }
}

pub const PROJECT_SIZES: [&str; 3] = ["small", "medium", "large"];
pub const MIN_PROJECT_COST: u32 = 5_000;
pub const PROJECT_COST_SPAN: u32 = 10_000;
pub const MIN_AQI_IMPROVEMENT: u32 = 10;
pub const AQI_IMPROVEMENT_SPAN: u32 = 50;

/// Draw a project size and cost, then format the suggestion sentence
pub fn reforestation_suggestion(random: &mut dyn RandomSource) -> String {
    let size = PROJECT_SIZES[random.below(PROJECT_SIZES.len() as u32) as usize];
    let cost = MIN_PROJECT_COST + random.below(PROJECT_COST_SPAN);
    format!(
        "We suggest a {size}-scale reforestation project. Estimated cost: ${cost}. \
         This could significantly improve local biodiversity and air quality."
    )
}

/// Draw an AQI improvement in `[10, 60)`
pub fn aqi_improvement(random: &mut dyn RandomSource) -> u32 {
    MIN_AQI_IMPROVEMENT + random.below(AQI_IMPROVEMENT_SPAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_uses_drawn_size_and_cost() {
        let mut random = ScriptedRandom::new([2, 1234]);
        assert_eq!(
            reforestation_suggestion(&mut random),
            "We suggest a large-scale reforestation project. Estimated cost: $6234. \
             This could significantly improve local biodiversity and air quality."
        );
    }

    #[test]
    fn scripted_draws_wrap_to_bound() {
        let mut random = ScriptedRandom::new([4, 10_000]);
        let text = reforestation_suggestion(&mut random);
        assert!(text.starts_with("We suggest a medium-scale"), "{text}");
        assert!(text.contains("Estimated cost: $5000."), "{text}");
    }

    #[test]
    fn improvement_range_edges() {
        assert_eq!(aqi_improvement(&mut ScriptedRandom::new([0])), 10);
        assert_eq!(aqi_improvement(&mut ScriptedRandom::new([49])), 59);
    }

    #[test]
    fn seeded_rng_stays_in_range_and_repeats() {
        let mut a = RngSource::new(Some(7));
        let mut b = RngSource::new(Some(7));
        for _ in 0..200 {
            let improvement = aqi_improvement(&mut a);
            assert!((10..60).contains(&improvement));
            assert_eq!(improvement, aqi_improvement(&mut b));
        }

        let mut rng = RngSource::new(Some(99));
        for _ in 0..200 {
            let text = reforestation_suggestion(&mut rng);
            let cost: u32 = text
                .split('$')
                .nth(1)
                .and_then(|rest| rest.split('.').next())
                .and_then(|n| n.parse().ok())
                .unwrap();
            assert!((5_000..15_000).contains(&cost));
        }
    }
}
