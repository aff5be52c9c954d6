//! The public façade: `initialize` resolves an algorithm by name into an
//! [`Instance`], which then answers `find_closest` and `create_striped`
//! queries. There is no explicit `finalize` — dropping the `Instance` frees
//! everything it owns.

use rand::Rng;

use crate::algorithms::hash_distance::{HashDistance, Variant as HashVariant};
use crate::algorithms::multiring::Multiring;
use crate::algorithms::ring::Ring;
use crate::algorithms::static_modulo::StaticModulo;
use crate::algorithms::xor::Xor;
use crate::stripe::{self, StripeMember};

/// Hard ceiling on replication factor, matching the reference
/// implementation's `CH_MAX_REPLICATION`.
pub const MAX_REPLICATION: u32 = 5;

#[derive(Debug, Clone)]
enum Algorithm {
    StaticModulo(StaticModulo),
    Xor(Xor),
    Hash(HashDistance),
    Ring(Ring),
    Multiring(Multiring),
}

/// A constructed placement instance: an algorithm selection plus whatever
/// private table that algorithm needs. Immutable after construction, so any
/// number of threads may share a `&Instance` for concurrent queries.
#[derive(Debug, Clone)]
pub struct Instance {
    n_svrs: u32,
    algorithm: Algorithm,
}

impl Instance {
    /// Resolves `name` against the algorithm registry and builds its
    /// virtual-node table. Returns `None` for an unrecognized name or for
    /// `n_svrs == 0` / `virt_factor == 0`, without allocating anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use ch_placement::Instance;
    ///
    /// let instance = Instance::initialize("ring", 16, 4).unwrap();
    /// let replicas = instance.find_closest(0xC0FFEE, 3);
    /// assert_eq!(replicas.len(), 3);
    ///
    /// assert!(Instance::initialize("not-a-real-algorithm", 16, 4).is_none());
    /// assert!(Instance::initialize("ring", 0, 4).is_none());
    /// ```
    pub fn initialize(name: &str, n_svrs: u32, virt_factor: u32) -> Option<Instance> {
        if n_svrs == 0 || virt_factor == 0 {
            return None;
        }

        let algorithm = match name {
            "static_modulo" => Algorithm::StaticModulo(StaticModulo::new(n_svrs)),
            "xor" => Algorithm::Xor(Xor::new(n_svrs, virt_factor)),
            "hash_lookup3" => {
                Algorithm::Hash(HashDistance::new(n_svrs, virt_factor, HashVariant::Lookup3))
            }
            "hash_spooky" => {
                Algorithm::Hash(HashDistance::new(n_svrs, virt_factor, HashVariant::Spooky))
            }
            "ring" => Algorithm::Ring(Ring::new(n_svrs, virt_factor)),
            "multiring" => Algorithm::Multiring(Multiring::new(n_svrs, virt_factor)),
            _ => return None,
        };

        Some(Instance { n_svrs, algorithm })
    }

    /// Number of physical servers this instance was constructed with.
    pub fn n_svrs(&self) -> u32 {
        self.n_svrs
    }

    /// Returns the `r` servers that should hold replicas of `obj`, ordered
    /// primary-first.
    ///
    /// # Panics
    ///
    /// Panics if `r` is zero or exceeds `min(n_svrs, MAX_REPLICATION)` — a
    /// programmer error, not a recoverable runtime condition.
    pub fn find_closest(&self, obj: u64, r: u32) -> Vec<u32> {
        assert!(r >= 1, "replication factor must be at least 1");
        assert!(
            r <= self.n_svrs.min(MAX_REPLICATION),
            "replication factor {r} exceeds min(n_svrs={}, MAX_REPLICATION={MAX_REPLICATION})",
            self.n_svrs
        );

        match &self.algorithm {
            Algorithm::StaticModulo(a) => a.find_closest(obj, r),
            Algorithm::Xor(a) => a.find_closest(obj, r),
            Algorithm::Hash(a) => a.find_closest(obj, r),
            Algorithm::Ring(a) => a.find_closest(obj, r),
            Algorithm::Multiring(a) => a.find_closest(obj, r),
        }
    }

    /// Splits `file_size` bytes into a striping plan of at most
    /// `max_stripe_width` members of `strip_size` bytes each, and assigns
    /// each member an object id. For `multiring`, ids are chosen so that
    /// every member's primary server is distinct; for every other
    /// algorithm, ids are drawn uniformly at random with no placement
    /// guarantee.
    ///
    /// # Panics
    ///
    /// Panics if `strip_size` or `max_stripe_width` is zero, or if `r` is
    /// out of range (see [`Instance::find_closest`]).
    pub fn create_striped(
        &self,
        rng: &mut impl Rng,
        file_size: u64,
        r: u32,
        max_stripe_width: u32,
        strip_size: u64,
    ) -> Vec<StripeMember> {
        assert!(r >= 1 && r <= self.n_svrs.min(MAX_REPLICATION));
        let sizes = stripe::partition_sizes(file_size, strip_size, max_stripe_width);

        let oids = match &self.algorithm {
            Algorithm::Multiring(m) => stripe::multiring_oids(m, rng, sizes.len(), r),
            _ => stripe::random_oids(rng, sizes.len()),
        };

        oids.into_iter()
            .zip(sizes)
            .map(|(oid, size)| StripeMember { oid, size })
            .collect()
    }
}
