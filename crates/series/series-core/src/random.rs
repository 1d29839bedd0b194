//! Random sources for series generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use series_spi::RandomSource;

/// Reproducible random source backed by a seeded [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        mean + std_dev * z
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays fixed streams of draws, cycling when a stream runs out.
///
/// Gaussian draws are taken as standard-normal values and scaled by the
/// requested mean and standard deviation. An empty stream yields 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    normals: Vec<f64>,
    choices: Vec<usize>,
    normal_pos: usize,
    choice_pos: usize,
}

impl ScriptedRandom {
    pub fn new(normals: Vec<f64>, choices: Vec<usize>) -> Self {
        Self {
            normals,
            choices,
            normal_pos: 0,
            choice_pos: 0,
        }
    }

    /// A source whose noise is always zero and always picks the first option.
    pub fn silent() -> Self {
        Self::default()
    }
}

impl RandomSource for ScriptedRandom {
    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        if self.normals.is_empty() {
            return mean;
        }
        let z = self.normals[self.normal_pos % self.normals.len()];
        self.normal_pos += 1;
        mean + std_dev * z
    }

    fn choose_index(&mut self, len: usize) -> usize {
        if self.choices.is_empty() {
            return 0;
        }
        let choice = self.choices[self.choice_pos % self.choices.len()];
        self.choice_pos += 1;
        choice % len
    }
}
