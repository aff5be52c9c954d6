//! # ch-placement
//!
//! `ch-placement` answers one question: given an opaque object id, a
//! replication factor, and a cluster of server slots, which servers should
//! hold that object's replicas? It is the placement core for a replicated
//! object store — deterministic, stateless, and process-local.
//!
//! Six algorithms are available, selected by name through [`Instance::initialize`]:
//! `static_modulo`, `xor`, `hash_lookup3`, `hash_spooky`, `ring`, and
//! `multiring`. All but `static_modulo` build a virtual-node table per
//! [`vnode`] and differ only in how they search it.
//!
//! ## Example
//!
//! ```rust
//! use ch_placement::Instance;
//!
//! let instance = Instance::initialize("ring", 64, 16).unwrap();
//! let replicas = instance.find_closest(0xC0FFEE, 3);
//!
//! assert_eq!(replicas.len(), 3);
//! assert!(replicas.iter().all(|&s| s < 64));
//! ```
//!
//! ## Striping
//!
//! [`Instance::create_striped`] partitions a file into stripe members and
//! assigns each an object id. On `multiring`, those ids are engineered so
//! that every member's primary server is distinct:
//!
//! ```rust
//! use ch_placement::Instance;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let instance = Instance::initialize("multiring", 32, 8).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let plan = instance.create_striped(&mut rng, 1 << 20, 3, 8, 4096);
//!
//! let total: u64 = plan.iter().map(|m| m.size).sum();
//! assert_eq!(total, 1 << 20);
//! ```
//!
//! ## References
//!
//! - Karger, David, et al. 1997. "Consistent Hashing and Random Trees:
//!   Distributed Caching Protocols for Relieving Hot Spots on the World
//!   Wide Web." STOC '97.
//! - Jenkins, Bob. "A hash function for hash table lookup" (`lookup3.c`,
//!   public domain).
//! - Jenkins, Bob. "SpookyHash: a 128-bit noncryptographic hash."
//!
//! ## License
//!
//! `ch-placement` is dual-licensed under the terms of either the MIT
//! License or the Apache License (Version 2.0).
//!
//! See [LICENSE-APACHE](LICENSE-APACHE) and [LICENSE-MIT](LICENSE-MIT) for
//! more details.

#![warn(missing_docs)]

pub mod algorithms;
pub mod hash;
mod instance;
pub mod rng;
pub mod stripe;
pub mod vnode;

pub use instance::{Instance, MAX_REPLICATION};
