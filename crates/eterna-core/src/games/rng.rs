//! Seedable randomness for catalog shuffles and block decorations.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;

/// Random source shared by one engine across restarts.
///
/// A fixed seed makes every shuffle reproducible; restarting an engine keeps
/// drawing from the same stream, so each play-through still gets a new order.
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: Mcg128Xsl64,
}

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: Mcg128Xsl64::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: Mcg128Xsl64::from_entropy(),
        }
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Fisher-Yates shuffle of a copy; the source slice is never touched.
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        out.shuffle(&mut self.inner);
        out
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
