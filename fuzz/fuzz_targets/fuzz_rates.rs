#![no_main]

use libfuzzer_sys::fuzz_target;

use dxcalc_core::{RateSet, RoundingMode};

fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }
    let word = |i: usize| {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&data[i * 8..i * 8 + 8]);
        bytes
    };
    // Cap the population so f64 products stay exact enough to compare
    let total = u64::from_le_bytes(word(0)) % 1_000_000_000;
    let prevalence = f64::from_le_bytes(word(1));
    let sensitivity = f64::from_le_bytes(word(2));
    let specificity = f64::from_le_bytes(word(3));

    // Invalid rates are rejected, never a panic
    let Ok(rates) = RateSet::new(total, prevalence, sensitivity, specificity) else {
        return;
    };
    for mode in RoundingMode::ALL {
        let counts = rates.to_counts(mode);
        assert_eq!(counts.total(), total);
        let _ = counts.metrics();
    }
});
