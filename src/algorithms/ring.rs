//! Classic consistent hashing: a single sorted virtual-node table, walked
//! clockwise from the nearest position, skipping servers already chosen.

use crate::vnode::{self, VNode};

/// Consistent hashing over a single sorted virtual-node table.
#[derive(Debug, Clone)]
pub struct Ring {
    n_svrs: u32,
    table: Vec<VNode>,
}

impl Ring {
    /// Builds the sorted virtual-node table for `n_svrs` servers with
    /// `virt_factor` virtual nodes each.
    pub fn new(n_svrs: u32, virt_factor: u32) -> Self {
        Ring {
            n_svrs,
            table: vnode::build_sorted_flat(n_svrs, virt_factor),
        }
    }

    /// Returns the `r` servers holding `obj`'s replicas, primary first.
    pub fn find_closest(&self, obj: u64, r: u32) -> Vec<u32> {
        let start = vnode::nearest_clockwise(&self.table, obj);
        let mut result = Vec::with_capacity(r as usize);
        let mut seen = vec![false; self.n_svrs as usize];
        let len = self.table.len();

        let mut idx = start;
        loop {
            let server = self.table[idx].server;
            if !seen[server as usize] {
                seen[server as usize] = true;
                result.push(server);
                if result.len() == r as usize {
                    break;
                }
            }
            idx = (idx + 1) % len;
        }

        result
    }
}
