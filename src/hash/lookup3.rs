//! Bob Jenkins' `lookup3` hash, little-endian two-output variant (`hashlittle2`).
//!
//! This is a direct byte-for-byte port of the public-domain reference
//! implementation's "byte-by-byte little endian" code path. The core only
//! ever feeds it explicitly little-endian byte buffers, so the platform's
//! native endianness never enters into it.

#[inline(always)]
fn rot(x: u32, k: u32) -> u32 {
    (x << k) | (x >> (32 - k))
}

#[inline(always)]
fn mix(a: &mut u32, b: &mut u32, c: &mut u32) {
    *a = a.wrapping_sub(*c);
    *a ^= rot(*c, 4);
    *c = c.wrapping_add(*b);
    *b = b.wrapping_sub(*a);
    *b ^= rot(*a, 6);
    *a = a.wrapping_add(*c);
    *c = c.wrapping_sub(*b);
    *c ^= rot(*b, 8);
    *b = b.wrapping_add(*a);
    *a = a.wrapping_sub(*c);
    *a ^= rot(*c, 16);
    *c = c.wrapping_add(*b);
    *b = b.wrapping_sub(*a);
    *b ^= rot(*a, 19);
    *a = a.wrapping_add(*c);
    *c = c.wrapping_sub(*b);
    *c ^= rot(*b, 4);
    *b = b.wrapping_add(*a);
}

#[inline(always)]
fn final_mix(a: &mut u32, b: &mut u32, c: &mut u32) {
    *c ^= *b;
    *c = c.wrapping_sub(rot(*b, 14));
    *a ^= *c;
    *a = a.wrapping_sub(rot(*c, 11));
    *b ^= *a;
    *b = b.wrapping_sub(rot(*a, 25));
    *c ^= *b;
    *c = c.wrapping_sub(rot(*b, 16));
    *a ^= *c;
    *a = a.wrapping_sub(rot(*c, 4));
    *b ^= *a;
    *b = b.wrapping_sub(rot(*a, 14));
    *c ^= *b;
    *c = c.wrapping_sub(rot(*b, 24));
}

/// Hashes `key` into the two accumulators `pc` and `pb`, updating both in place.
///
/// Mirrors `hashlittle2` from the reference `lookup3.c`: `pc`/`pb` act as both
/// the seed on entry and the two 32-bit output halves on return.
pub fn hashlittle2(key: &[u8], pc: &mut u32, pb: &mut u32) {
    let mut a: u32 = 0xdeadbeefu32
        .wrapping_add(key.len() as u32)
        .wrapping_add(*pc);
    let mut b = a;
    let mut c = a.wrapping_add(*pb);

    let mut chunks = key.chunks_exact(12);
    for chunk in chunks.by_ref() {
        a = a.wrapping_add(chunk[0] as u32);
        a = a.wrapping_add((chunk[1] as u32) << 8);
        a = a.wrapping_add((chunk[2] as u32) << 16);
        a = a.wrapping_add((chunk[3] as u32) << 24);
        b = b.wrapping_add(chunk[4] as u32);
        b = b.wrapping_add((chunk[5] as u32) << 8);
        b = b.wrapping_add((chunk[6] as u32) << 16);
        b = b.wrapping_add((chunk[7] as u32) << 24);
        c = c.wrapping_add(chunk[8] as u32);
        c = c.wrapping_add((chunk[9] as u32) << 8);
        c = c.wrapping_add((chunk[10] as u32) << 16);
        c = c.wrapping_add((chunk[11] as u32) << 24);
        mix(&mut a, &mut b, &mut c);
    }

    let rem = chunks.remainder();
    let len = rem.len();
    if len == 0 {
        *pc = c;
        *pb = b;
        return;
    }

    if len >= 12 {
        c = c.wrapping_add((rem[11] as u32) << 24);
    }
    if len >= 11 {
        c = c.wrapping_add((rem[10] as u32) << 16);
    }
    if len >= 10 {
        c = c.wrapping_add((rem[9] as u32) << 8);
    }
    if len >= 9 {
        c = c.wrapping_add(rem[8] as u32);
    }
    if len >= 8 {
        b = b.wrapping_add((rem[7] as u32) << 24);
    }
    if len >= 7 {
        b = b.wrapping_add((rem[6] as u32) << 16);
    }
    if len >= 6 {
        b = b.wrapping_add((rem[5] as u32) << 8);
    }
    if len >= 5 {
        b = b.wrapping_add(rem[4] as u32);
    }
    if len >= 4 {
        a = a.wrapping_add((rem[3] as u32) << 24);
    }
    if len >= 3 {
        a = a.wrapping_add((rem[2] as u32) << 16);
    }
    if len >= 2 {
        a = a.wrapping_add((rem[1] as u32) << 8);
    }
    a = a.wrapping_add(rem[0] as u32);

    final_mix(&mut a, &mut b, &mut c);
    *pc = c;
    *pb = b;
}

/// Hashes a `u64`, expressed as its little-endian byte representation, with
/// the given 32-bit seed pair. Returns the combined 64-bit result as `h1 |
/// (h2 << 32)`, the convention used throughout the virtual-node table and
/// the `hash_lookup3` distance function.
pub fn hash_u64_to_u64(value: u64, seed_h1: u32, seed_h2: u32) -> u64 {
    let mut h1 = seed_h1;
    let mut h2 = seed_h2;
    hashlittle2(&value.to_le_bytes(), &mut h1, &mut h2);
    (h1 as u64) | ((h2 as u64) << 32)
}
