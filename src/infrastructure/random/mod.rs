//! Phrase selectors backed by `rand`

use rand::prelude::*;
use rand::rngs::StdRng;
use std::sync::Mutex;

use crate::domain::traits::PhraseSelector;

/// Uniform choice from the thread-local generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSelector;

impl PhraseSelector for ThreadRngSelector {
    fn select(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        thread_rng().gen_range(0..len)
    }
}

/// Uniform choice from a seeded generator; the same seed gives the same sequence
pub struct SeededSelector {
    rng: Mutex<StdRng>,
}

impl SeededSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl PhraseSelector for SeededSelector {
    fn select(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        // A poisoned generator is still a usable generator
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }
}
