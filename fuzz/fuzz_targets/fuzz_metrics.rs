#![no_main]

use libfuzzer_sys::fuzz_target;

use dxcalc_core::{CountSet, DecisionAid};

fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }
    let cell = |i: usize| {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&data[i * 8..i * 8 + 8]);
        u64::from_le_bytes(bytes)
    };
    let counts = CountSet::new(cell(0), cell(1), cell(2), cell(3));

    // Should not panic, even when margins saturate
    let m = counts.metrics();
    assert!(m.sensitivity.is_finite() && m.specificity.is_finite());
    assert!(m.lr_plus.is_finite() && m.lr_minus.is_finite());
    let _ = m.undefined_metrics(&counts);

    let aid = DecisionAid::from_counts(&counts);
    assert_eq!(aid.positive_test.icons.len(), 100);
    assert_eq!(aid.negative_test.icons.len(), 100);
});
