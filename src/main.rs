//! Demonstration binary: prints observed-vs-expected primary-occupancy
//! statistics for every placement algorithm over a batch of random object
//! ids. This is a correctness demonstration, not a production CLI — it
//! takes no arguments and its constants are fixed below.

use ch_placement::Instance;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const N_SVRS: u32 = 10;
const VIRT_FACTOR: u32 = 16;
const ITEMS: u32 = 100_000;
const REPLICATION: u32 = 1;

fn print_statistic(name: &str, counts: &[u32], items: u32, n_svrs: u32) {
    println!("Testing {name} ({n_svrs} servers, {items} items)");
    let expected = 1.0 / n_svrs as f64;
    for (server, &count) in counts.iter().enumerate() {
        let actual = count as f64 / items as f64;
        println!(
            "server {server:02} - Expected: {expected:.6} | Actual: {actual:.6} | Error: {:9.6}",
            expected - actual
        );
    }
    println!();
}

fn test_distribution(name: &str, rng: &mut StdRng) {
    let instance = Instance::initialize(name, N_SVRS, VIRT_FACTOR)
        .expect("demo algorithm name must be registered");
    let mut counts = vec![0u32; N_SVRS as usize];
    for _ in 0..ITEMS {
        let obj: u64 = rng.gen();
        let primary = instance.find_closest(obj, REPLICATION)[0];
        counts[primary as usize] += 1;
    }
    print_statistic(name, &counts, ITEMS, N_SVRS);
}

fn main() {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for name in [
        "static_modulo",
        "xor",
        "hash_lookup3",
        "hash_spooky",
        "ring",
        "multiring",
    ] {
        test_distribution(name, &mut rng);
    }
}
