//! Closest-by-hashed-distance placement: the same widening-scan shape as
//! `xor`, but distance between the object id and a virtual node id is a
//! commutative keyed hash rather than a raw xor.

use crate::algorithms::closest_by_distance;
use crate::hash;
use crate::vnode::{self, VNode};

/// Which keyed hash computes the distance between object id and virt_id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// `hash_lookup3`: keyed lookup3 distance.
    Lookup3,
    /// `hash_spooky`: keyed SpookyHash64 distance.
    Spooky,
}

/// Closest-by-hashed-distance placement over a flat virtual-node table.
#[derive(Debug, Clone)]
pub struct HashDistance {
    n_svrs: u32,
    table: Vec<VNode>,
    variant: Variant,
}

impl HashDistance {
    /// Builds the flat virtual-node table for `n_svrs` servers with
    /// `virt_factor` virtual nodes each, using the given distance `variant`.
    pub fn new(n_svrs: u32, virt_factor: u32, variant: Variant) -> Self {
        HashDistance {
            n_svrs,
            table: vnode::build_flat(n_svrs, virt_factor),
            variant,
        }
    }

    /// Returns the `r` servers holding `obj`'s replicas, primary first.
    pub fn find_closest(&self, obj: u64, r: u32) -> Vec<u32> {
        match self.variant {
            Variant::Lookup3 => {
                closest_by_distance(&self.table, self.n_svrs, r, |virt_id| {
                    hash::lookup3_distance(obj, virt_id)
                })
            }
            Variant::Spooky => {
                closest_by_distance(&self.table, self.n_svrs, r, |virt_id| {
                    hash::spooky_distance(obj, virt_id)
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup3_variant_returns_r_distinct_servers() {
        let algo = HashDistance::new(12, 4, Variant::Lookup3);
        let result = algo.find_closest(555, 4);
        assert_eq!(result.len(), 4);
        let mut sorted = result.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 4);
    }

    #[test]
    fn spooky_variant_returns_r_distinct_servers() {
        let algo = HashDistance::new(12, 4, Variant::Spooky);
        let result = algo.find_closest(555, 4);
        assert_eq!(result.len(), 4);
        let mut sorted = result.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 4);
    }

    #[test]
    fn variants_need_not_agree() {
        let lookup3 = HashDistance::new(20, 4, Variant::Lookup3);
        let spooky = HashDistance::new(20, 4, Variant::Spooky);
        // Both are valid placements for the same object but are not required
        // to choose the same servers.
        assert_eq!(lookup3.find_closest(42, 3).len(), 3);
        assert_eq!(spooky.find_closest(42, 3).len(), 3);
    }

    #[test]
    fn is_deterministic() {
        let algo = HashDistance::new(9, 3, Variant::Lookup3);
        assert_eq!(algo.find_closest(1, 2), algo.find_closest(1, 2));
    }
}
