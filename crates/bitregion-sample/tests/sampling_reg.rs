//! Sampling regression test
//!
//! Runs every sampling strategy over a ring-shaped region spanning two
//! words per column and checks counts, membership and spacing.
//!
//! Run with:
//! ```
//! cargo test -p bitregion-sample --test sampling_reg
//! ```

use bitregion_core::{Coord, Region};
use bitregion_sample::{QuasiRandom, SampleOptions, Sampling, Sobol2};
use bitregion_test::RegParams;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

fn ring() -> Region {
    let mut r = Region::new(50, 100);
    r.insert_circle(Coord::new(25, 50), 24)
        .remove_circle(Coord::new(25, 50), 12);
    r
}

fn flag(ok: bool) -> f64 {
    if ok { 1.0 } else { 0.0 }
}

#[test]
fn sampling_reg() {
    let mut rp = RegParams::new("sampling");
    let region = ring();
    let size = region.size();
    let options = SampleOptions::default().with_fraction(0.05);
    let expected = options.count(size);

    // Mixed: seeded and reproducible
    let mixed = region.mixed_random_separated(&options, 77);
    rp.compare_values(expected as f64, mixed.len() as f64, 0.0);
    rp.compare_values(1.0, flag(mixed.iter().all(|&c| region.contains_coord(c))), 0.0);
    let again = region.mixed_random_region(&options, 77);
    let set: HashSet<Coord> = mixed.iter().copied().collect();
    rp.compare_values(set.len() as f64, again.size() as f64, 0.0);

    // Quasi: a generator resumes where the last call stopped
    let mut sobol = Sobol2::new();
    let first = region.quasi_random_separated(&options, &mut sobol);
    rp.compare_values(expected as f64, first.len() as f64, 0.0);
    let mut resumed = Sobol2::new();
    resumed.skip_to(expected as u64);
    let second = region.quasi_random_separated(&options, &mut sobol);
    let replay = region.quasi_random_separated(&options, &mut resumed);
    rp.compare_values(1.0, flag(second == replay), 0.0);

    // Z-curve: exact count, no repeats, spread over the ring
    let z = region.separated_region_z_curve(&options, &mut Sobol2::new());
    rp.compare_values(expected as f64, z.size() as f64, 0.0);
    rp.compare_values(1.0, flag(region.contains_all(&z)), 0.0);
    let left = z.as_coords().iter().filter(|c| c.x < 25).count();
    rp.compare_values(expected as f64 / 2.0, left as f64, expected as f64 / 4.0);

    // Scatter and random subsets
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let scattered = region.random_scatter(&mut rng, 3, Some(40));
    rp.compare_values(1.0, flag(scattered.len() <= 40 && !scattered.is_empty()), 0.0);
    let portion = region.random_portion(&mut rng, 123);
    rp.compare_values(123.0, portion.size() as f64, 0.0);
    let thinned = region.random_region(&mut rng, 0.25);
    rp.compare_values(size as f64 / 4.0, thinned.size() as f64, size as f64 / 10.0);

    assert!(rp.cleanup(), "sampling regression test failed");
}
