#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

use combcalc_core::{Arguments, Arity, Engine, ExplicitEvaluator, FunctionFamily};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // Byte 0 picks the family, bytes 1..3 give n and k; capped at 64 for speed.
    let family = FunctionFamily::ALL[usize::from(data[0]) % FunctionFamily::ALL.len()];
    let n = i64::from(data[1] % 64);
    let k = i64::from(data[2] % 64);

    let args = match family.arity() {
        Arity::Single => Arguments::single(n),
        Arity::Pair => Arguments::pair(n, k),
        Arity::Parts => {
            let parts: Vec<i64> = data[3..].iter().take(6).map(|&b| i64::from(b % 16)).collect();
            Arguments::with_parts(parts.iter().sum(), parts)
        }
    };

    let tabulated = Engine::default();
    let explicit = Engine::default().with_evaluator(Arc::new(ExplicitEvaluator::new()));

    match (tabulated.evaluate(family, &args), explicit.evaluate(family, &args)) {
        (Ok(t), Ok(e)) => assert_eq!(t, e, "{family} {args:?}"),
        (Err(t), Err(e)) => assert_eq!(t, e),
        (t, e) => panic!("evaluators disagree on validity: {t:?} vs {e:?}"),
    }
});
