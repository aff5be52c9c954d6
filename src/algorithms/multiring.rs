//! `virt_factor` independent rings, one per virtual-node slot. The object id
//! selects a ring via `obj % virt_factor`; within a ring each server appears
//! exactly once, so no duplicate-skipping is needed on lookup.

use crate::vnode::{self, VNode};

/// Placement over `virt_factor` independent per-slot rings.
#[derive(Debug, Clone)]
pub struct Multiring {
    n_svrs: u32,
    virt_factor: u32,
    rings: Vec<Vec<VNode>>,
}

impl Multiring {
    /// Builds `virt_factor` independent rings over `n_svrs` servers.
    pub fn new(n_svrs: u32, virt_factor: u32) -> Self {
        Multiring {
            n_svrs,
            virt_factor,
            rings: vnode::build_rings(n_svrs, virt_factor),
        }
    }

    /// Number of physical servers.
    pub fn n_svrs(&self) -> u32 {
        self.n_svrs
    }

    /// Number of independent rings (and virtual nodes per server).
    pub fn virt_factor(&self) -> u32 {
        self.virt_factor
    }

    /// Exposes the per-slot rings for the striping helper, which needs to
    /// reason about gaps between consecutive virt_ids on a specific ring.
    pub fn rings(&self) -> &[Vec<VNode>] {
        &self.rings
    }

    /// Returns the `r` servers holding `obj`'s replicas, primary first.
    pub fn find_closest(&self, obj: u64, r: u32) -> Vec<u32> {
        let ring_idx = (obj % self.virt_factor as u64) as usize;
        let ring = &self.rings[ring_idx];
        let start = vnode::nearest_clockwise(ring, obj);

        let len = ring.len();
        (0..r as usize)
            .map(|k| ring[(start + k) % len].server)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_r_distinct_servers() {
        let m = Multiring::new(32, 8);
        let result = m.find_closest(12345, 3);
        assert_eq!(result.len(), 3);
        let mut sorted = result.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 3);
    }

    #[test]
    fn is_deterministic() {
        let m = Multiring::new(32, 8);
        assert_eq!(m.find_closest(999, 4), m.find_closest(999, 4));
    }

    #[test]
    fn replica_prefix_property_holds() {
        let m = Multiring::new(40, 5);
        let three = m.find_closest(4242, 3);
        let four = m.find_closest(4242, 4);
        assert_eq!(&four[..3], &three[..]);
    }

    #[test]
    fn every_ring_uses_every_server_exactly_once() {
        let m = Multiring::new(5, 3);
        for ring in m.rings() {
            let mut servers: Vec<u32> = ring.iter().map(|v| v.server).collect();
            servers.sort_unstable();
            assert_eq!(servers, vec![0, 1, 2, 3, 4]);
        }
    }
}
