//! Virtual-node table construction, shared by every placement algorithm.
//!
//! Each physical server contributes `virt_factor` virtual nodes, one per
//! slot `j`, with an id derived from `hash::virtual_node_id(server, j)`.
//! Construction order is always slot-major (`j` outer, server `i` inner),
//! which also fixes the stable tie-break used when virt_ids collide after
//! sorting.

use crate::hash;

/// A single virtual node: a physical server's stand-in at some point on the
/// hash space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VNode {
    /// The physical server this virtual node stands in for.
    pub server: u32,
    /// This virtual node's position on the hash space.
    pub virt_id: u64,
}

/// Builds the flat, unsorted virtual-node table used by the `xor` and
/// `hash_*` algorithms, in construction order.
pub fn build_flat(n_svrs: u32, virt_factor: u32) -> Vec<VNode> {
    let mut table = Vec::with_capacity((n_svrs as usize) * (virt_factor as usize));
    for j in 0..virt_factor {
        for i in 0..n_svrs {
            table.push(VNode {
                server: i,
                virt_id: hash::virtual_node_id(i, j),
            });
        }
    }
    table
}

/// Builds the flat virtual-node table used by `ring`, sorted ascending by
/// `virt_id` with ties broken by construction order (a stable sort
/// preserves this automatically).
pub fn build_sorted_flat(n_svrs: u32, virt_factor: u32) -> Vec<VNode> {
    let mut table = build_flat(n_svrs, virt_factor);
    table.sort_by_key(|v| v.virt_id);
    table
}

/// Builds the per-slot rings used by `multiring`: `virt_factor` independent
/// sequences, each containing exactly one virtual node per server, each
/// sorted ascending by `virt_id`.
pub fn build_rings(n_svrs: u32, virt_factor: u32) -> Vec<Vec<VNode>> {
    (0..virt_factor)
        .map(|j| {
            let mut ring: Vec<VNode> = (0..n_svrs)
                .map(|i| VNode {
                    server: i,
                    virt_id: hash::virtual_node_id(i, j),
                })
                .collect();
            ring.sort_by_key(|v| v.virt_id);
            ring
        })
        .collect()
}

/// Finds the index of the virtual node nearest clockwise to `target` in a
/// table sorted ascending by `virt_id` (i.e. the first entry with
/// `virt_id >= target`), wrapping to the last index if `target` exceeds
/// every entry.
pub fn nearest_clockwise(table: &[VNode], target: u64) -> usize {
    match table.binary_search_by_key(&target, |v| v.virt_id) {
        Ok(idx) => idx,
        Err(idx) if idx < table.len() => idx,
        Err(_) => table.len() - 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_table_has_expected_length() {
        let table = build_flat(5, 3);
        assert_eq!(table.len(), 15);
    }

    #[test]
    fn sorted_flat_table_is_sorted() {
        let table = build_sorted_flat(20, 8);
        assert!(table.windows(2).all(|w| w[0].virt_id <= w[1].virt_id));
    }

    #[test]
    fn rings_each_contain_every_server_once() {
        let rings = build_rings(6, 4);
        assert_eq!(rings.len(), 4);
        for ring in &rings {
            assert_eq!(ring.len(), 6);
            let mut servers: Vec<u32> = ring.iter().map(|v| v.server).collect();
            servers.sort_unstable();
            assert_eq!(servers, vec![0, 1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn nearest_clockwise_wraps() {
        let table = vec![
            VNode { server: 0, virt_id: 10 },
            VNode { server: 1, virt_id: 20 },
            VNode { server: 2, virt_id: 30 },
        ];
        assert_eq!(nearest_clockwise(&table, 0), 0);
        assert_eq!(nearest_clockwise(&table, 15), 1);
        assert_eq!(nearest_clockwise(&table, 30), 2);
        assert_eq!(nearest_clockwise(&table, 100), 2);
    }
}
