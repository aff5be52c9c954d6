//! Bit-exact hash primitives used to build virtual-node tables and to
//! measure hashed distance between an object id and a candidate server.
//!
//! Both hashes are pinned algorithms, not swappable via `std::hash::Hash` —
//! their mixing steps are part of this crate's observable contract, so they
//! live here as plain functions rather than behind a trait.

pub mod lookup3;
pub mod spooky;

/// Derives a virtual node id for server `server_idx`'s `j`-th virtual node,
/// per the construction procedure shared by every algorithm that builds a
/// virtual-node table: seed `(h1, h2) = (j, 0)`, hash the server index's
/// little-endian bytes, and combine the halves as `h1 | (h2 << 32)`.
pub fn virtual_node_id(server_idx: u32, j: u32) -> u64 {
    lookup3::hash_u64_to_u64(server_idx as u64, j, 0)
}

/// Hashes a single `u64` object id with lookup3, seeded with zero, as used
/// by the `static_modulo` algorithm and as the commutative keyed hash inside
/// `hash_lookup3`.
pub fn lookup3_u64(value: u64) -> u64 {
    lookup3::hash_u64_to_u64(value, 0, 0)
}

/// Computes the commutative "hashed distance" between two 64-bit values
/// using lookup3: the larger operand seeds the hash, the smaller is hashed.
pub fn lookup3_distance(a: u64, b: u64) -> u64 {
    let (higher, lower) = if a >= b { (a, b) } else { (b, a) };
    let seed_h1 = (higher & 0xFFFF_FFFF) as u32;
    let seed_h2 = ((higher >> 32) & 0xFFFF_FFFF) as u32;
    lookup3::hash_u64_to_u64(lower, seed_h1, seed_h2)
}

/// Computes the commutative "hashed distance" between two 64-bit values
/// using SpookyHash64: the larger operand seeds the hash, the smaller is
/// hashed.
pub fn spooky_distance(a: u64, b: u64) -> u64 {
    let (higher, lower) = if a >= b { (a, b) } else { (b, a) };
    spooky::hash64(&lower.to_le_bytes(), higher)
}
