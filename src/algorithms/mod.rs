//! The five placement algorithms. Each owns its own private state (a flat
//! table, a sorted table, or a set of rings) and exposes `find_closest`;
//! dispatch between them is a tagged enum in [`crate::instance`], chosen
//! once when an instance is created and never changed.

pub mod hash_distance;
pub mod multiring;
pub mod ring;
pub mod static_modulo;
pub mod xor;

use crate::vnode::VNode;

/// Shared shape of `xor` and `hash_*`: find the `r` virtual nodes minimizing
/// `distance(virt_id)`, widening the scan past the first `r` candidates
/// until `r` *distinct* physical servers have been collected.
///
/// `n_svrs` bounds the "seen" bitset; callers guarantee `r <= n_svrs`.
pub(crate) fn closest_by_distance(
    table: &[VNode],
    n_svrs: u32,
    r: u32,
    distance: impl Fn(u64) -> u64,
) -> Vec<u32> {
    let mut ranked: Vec<(u64, u32)> = table
        .iter()
        .map(|v| (distance(v.virt_id), v.server))
        .collect();
    ranked.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));

    let mut seen = vec![false; n_svrs as usize];
    let mut result = Vec::with_capacity(r as usize);
    for (_, server) in ranked {
        if !seen[server as usize] {
            seen[server as usize] = true;
            result.push(server);
            if result.len() == r as usize {
                break;
            }
        }
    }
    result
}
