//! Non-consistent baseline algorithm: modulo the hashed object id, then walk
//! consecutive server indices. Included for comparison against the
//! consistent algorithms and as the simplest possible correctness check.

use crate::hash;

/// Non-consistent baseline: `hash(obj) mod n_svrs`, then consecutive servers.
#[derive(Debug, Clone)]
pub struct StaticModulo {
    n_svrs: u32,
}

impl StaticModulo {
    /// Builds an instance over `n_svrs` servers. Ignores `virt_factor`.
    pub fn new(n_svrs: u32) -> Self {
        StaticModulo { n_svrs }
    }

    /// Returns the `r` servers holding `obj`'s replicas, primary first.
    pub fn find_closest(&self, obj: u64, r: u32) -> Vec<u32> {
        let hashed = hash::lookup3_u64(obj);
        let start = (hashed % self.n_svrs as u64) as u32;
        (0..r).map(|k| (start + k) % self.n_svrs).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_r_consecutive_servers() {
        let algo = StaticModulo::new(7);
        let result = algo.find_closest(1, 3);
        assert_eq!(result.len(), 3);
        for w in result.windows(2) {
            assert_eq!((w[0] + 1) % 7, w[1]);
        }
    }

    #[test]
    fn is_deterministic() {
        let algo = StaticModulo::new(10);
        assert_eq!(algo.find_closest(12345, 4), algo.find_closest(12345, 4));
    }

    #[test]
    fn wraps_around_server_count() {
        let algo = StaticModulo::new(3);
        let result = algo.find_closest(u64::MAX, 3);
        let mut sorted = result.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2]);
    }
}
