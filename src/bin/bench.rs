//! Timing benchmark: measures `find_closest` throughput for every placement
//! algorithm over a fixed batch of random object ids.

use ch_placement::Instance;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

const N_SVRS: u32 = 100;
const VIRT_FACTOR: u32 = 64;
const ITEMS: u32 = 1_000_000;
const REPLICATION: u32 = 3;

fn print_bench_statistic(name: &str, elapsed_ms: f64, items: u32) {
    println!("Benching {name} ({N_SVRS} servers, {VIRT_FACTOR} virt_factor, {items} items)");
    println!("Total elapsed time:        {elapsed_ms:12.3} ms");
    println!(
        "Nanoseconds per operation: {:12.3} ns",
        elapsed_ms * 1_000_000.0 / items as f64
    );
    println!(
        "Operations per millisecond:{:12.3} op/ms",
        items as f64 / elapsed_ms
    );
    println!();
}

fn bench(name: &str, objs: &[u64]) {
    let instance = Instance::initialize(name, N_SVRS, VIRT_FACTOR)
        .expect("bench algorithm name must be registered");

    let start = Instant::now();
    for &obj in objs {
        let _ = instance.find_closest(obj, REPLICATION);
    }
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    print_bench_statistic(name, elapsed_ms, objs.len() as u32);
}

fn main() {
    let mut rng = StdRng::seed_from_u64(0xB3F0);
    let objs: Vec<u64> = (0..ITEMS).map(|_| rng.gen()).collect();

    for name in [
        "static_modulo",
        "xor",
        "hash_lookup3",
        "hash_spooky",
        "ring",
        "multiring",
    ] {
        bench(name, &objs);
    }
}
