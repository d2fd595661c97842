#![no_main]

use libfuzzer_sys::fuzz_target;

use combcalc_core::{validate, Arguments, FunctionFamily};

// Arbitrary signed arguments must either validate or be rejected, never panic.
fuzz_target!(|data: &[u8]| {
    if data.len() < 17 {
        return;
    }
    let family = FunctionFamily::ALL[usize::from(data[0]) % FunctionFamily::ALL.len()];
    let n = i64::from_le_bytes(data[1..9].try_into().unwrap());
    let k = i64::from_le_bytes(data[9..17].try_into().unwrap());
    let parts: Vec<i64> = data[17..]
        .chunks_exact(8)
        .map(|c| i64::from_le_bytes(c.try_into().unwrap()))
        .collect();

    let _ = validate(family, &Arguments::pair(n, k), 1000);
    let _ = validate(family, &Arguments::single(n), 1000);
    let _ = validate(family, &Arguments::with_parts(n, parts), 1000);
});
