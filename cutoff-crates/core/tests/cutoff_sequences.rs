use cutoff_core::cutoffs;
use cutoff_core::Cutoff;
use cutoff_core::CutoffOptions;
use cutoff_core::CutoffStrategy;
use cutoff_core::GeometricCutoff;
use cutoff_core::LubyCutoff;
use cutoff_core::RandomCutoff;

fn take(cutoff: &mut dyn Cutoff, count: usize) -> Vec<u64> {
    (0..count).map(|_| cutoff.next()).collect()
}

#[test]
fn luby_prefix() {
    let mut cutoff = LubyCutoff::new(1).unwrap();
    assert_eq!(
        take(&mut cutoff, 15),
        vec![1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8]
    );
}

#[test]
fn luby_block_ends_beyond_precomputed_values() {
    let mut cutoff = LubyCutoff::new(1).unwrap();
    let values = take(&mut cutoff, (1 << 16) - 1);
    for m in 1..=16 {
        assert_eq!(values[(1 << m) - 2], 1 << (m - 1));
    }
}

#[test]
fn geometric_doubling() {
    let mut cutoff = GeometricCutoff::new(5, 2.0).unwrap();
    assert_eq!(take(&mut cutoff, 5), vec![5, 10, 20, 40, 80]);
}

#[test]
fn geometric_saturates() {
    let mut cutoff = cutoffs::geometric(3, 10.0).unwrap();
    let values = take(&mut cutoff, 40);
    // 3 * 10^18 is the last representable value
    assert_eq!(values[18], 3_000_000_000_000_000_000);
    assert!(values[19..].iter().all(|&value| value == u64::MAX));
}

#[test]
fn random_is_reproducible_and_bounded() {
    let mut first = RandomCutoff::new(2024, 50, 5000, 25).unwrap();
    let mut second = RandomCutoff::new(2024, 50, 5000, 25).unwrap();

    let first_values = take(&mut first, 10_000);
    let second_values = take(&mut second, 10_000);

    assert_eq!(first_values, second_values);
    assert!(first_values.iter().all(|&value| value >= 50));
}

#[test]
fn generators_are_independent() {
    let mut observed = cutoffs::random(9, 1, 100, 4).unwrap();
    let mut untouched = cutoffs::random(9, 1, 100, 4).unwrap();

    let mut interleaved = Vec::new();
    let mut other = cutoffs::random(9, 1, 100, 4).unwrap();
    for _ in 0..100 {
        interleaved.push(observed.next());
        let _ = other.next();
    }

    assert_eq!(interleaved, take(&mut untouched, 100));
}

#[test]
fn options_create_every_strategy() {
    for strategy in [
        CutoffStrategy::Constant,
        CutoffStrategy::Linear,
        CutoffStrategy::Geometric,
        CutoffStrategy::Luby,
        CutoffStrategy::Random,
    ] {
        let options = CutoffOptions {
            strategy,
            ..Default::default()
        };
        let mut cutoff = options.create().unwrap();
        let values = take(&mut cutoff, 100);
        assert!(values.iter().all(|&value| value > 0), "{strategy} produced 0");
    }
}
