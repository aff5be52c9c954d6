//! Striping: partitioning a file into byte ranges across a stripe width, and
//! choosing object ids for those ranges — either arbitrary random ids, or
//! (for `multiring`) ids engineered to land on a specific server sequence.

use crate::algorithms::multiring::Multiring;
use rand::Rng;

/// One member of a striping plan: an object id and the number of bytes it
/// holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripeMember {
    /// Object id this member was assigned.
    pub oid: u64,
    /// Number of bytes this member holds.
    pub size: u64,
}

/// Partitions `file_size` bytes into `stripe_width` members (each a multiple
/// of `strip_size` except possibly the last on each round), where
/// `stripe_width = min(ceil(file_size / strip_size), max_stripe_width)`.
///
/// The sum of returned sizes always equals `file_size`, and every returned
/// size is nonzero. `file_size == 0` is the one exception: it yields zero
/// stripe members rather than a single member of size 0.
pub fn partition_sizes(file_size: u64, strip_size: u64, max_stripe_width: u32) -> Vec<u64> {
    assert!(strip_size > 0, "strip_size must be nonzero");
    assert!(max_stripe_width > 0, "max_stripe_width must be nonzero");

    if file_size == 0 {
        return Vec::new();
    }

    let natural_width = file_size.div_ceil(strip_size);
    let stripe_width = natural_width.min(max_stripe_width as u64) as usize;

    let mut sizes = vec![0u64; stripe_width];
    let round_bytes = stripe_width as u64 * strip_size;
    let full_rounds = file_size / round_bytes;
    let mut remaining = file_size - full_rounds * round_bytes;

    if full_rounds > 0 {
        for size in sizes.iter_mut() {
            *size += full_rounds * strip_size;
        }
    }

    let mut idx = 0usize;
    while remaining >= strip_size {
        sizes[idx] += strip_size;
        remaining -= strip_size;
        idx = (idx + 1) % stripe_width;
    }
    if remaining > 0 {
        sizes[idx] += remaining;
    }

    sizes
}

/// Draws `count` arbitrary object ids with no placement guarantee, for use
/// with any algorithm other than `multiring`.
pub fn random_oids(rng: &mut impl Rng, count: usize) -> Vec<u64> {
    (0..count).map(|_| crate::rng::random_u64(rng)).collect()
}

/// Draws `count` object ids engineered so that, on `multiring`'s
/// `find_closest`, consecutive ids land on consecutive ring positions
/// `replication` apart — giving a stripe whose primaries are guaranteed
/// pairwise distinct and whose secondaries never collide with another
/// member's primary.
pub fn multiring_oids(
    multiring: &Multiring,
    rng: &mut impl Rng,
    count: usize,
    replication: u32,
) -> Vec<u64> {
    let n_svrs = multiring.n_svrs();
    let virt_factor = multiring.virt_factor() as u64;
    let rings = multiring.rings();

    let mut ring = rng.gen_range(0..multiring.virt_factor());
    let mut ring_idx = rng.gen_range(0..n_svrs) as usize;

    let mut oids = Vec::with_capacity(count);
    for _ in 0..count {
        let table = &rings[ring as usize];
        let len = table.len();
        let current = table[ring_idx].virt_id;
        let next_idx = (ring_idx + 1) % len;

        let raw_range = if next_idx == 0 {
            (u64::MAX - current).wrapping_add(table[0].virt_id)
        } else {
            table[next_idx].virt_id - current
        };

        // Divide the gap among this server's virt_factor slots, then back
        // off by a few units to absorb rounding skew at the boundary.
        let range = (raw_range / virt_factor).saturating_sub(3).max(1);
        let offset = rng.gen_range(0..range);

        let mut oid = current.wrapping_add((offset + 1).wrapping_mul(virt_factor));
        oid -= oid % virt_factor;
        oid += ring as u64;
        oids.push(oid);

        ring_idx = (ring_idx + replication as usize) % n_svrs as usize;
    }

    oids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::multiring::Multiring;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn sizes_sum_to_file_size() {
        let sizes = partition_sizes(1 << 30, 1 << 20, 10);
        assert_eq!(sizes.len(), 10);
        assert_eq!(sizes.iter().sum::<u64>(), 1 << 30);
    }

    #[test]
    fn sizes_sum_to_file_size_with_uneven_remainder() {
        let sizes = partition_sizes(1_000_003, 4096, 7);
        assert_eq!(sizes.iter().sum::<u64>(), 1_000_003);
        assert!(sizes.len() <= 7);
    }

    #[test]
    fn stripe_width_never_exceeds_max() {
        let sizes = partition_sizes(1 << 40, 1, 16);
        assert_eq!(sizes.len(), 16);
    }

    #[test]
    fn small_file_gets_single_member() {
        let sizes = partition_sizes(100, 1 << 20, 10);
        assert_eq!(sizes, vec![100]);
    }

    #[test]
    fn multiring_oids_place_on_distinct_primaries() {
        let m = Multiring::new(32, 8);
        let mut rng = StdRng::seed_from_u64(7);
        let oids = multiring_oids(&m, &mut rng, 10, 3);
        let primaries: Vec<u32> = oids.iter().map(|&oid| m.find_closest(oid, 1)[0]).collect();
        let mut sorted = primaries.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), primaries.len());
    }

    #[test]
    fn random_oids_returns_requested_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let oids = random_oids(&mut rng, 5);
        assert_eq!(oids.len(), 5);
    }
}
