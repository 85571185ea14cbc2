#![no_main]
use libfuzzer_sys::fuzz_target;
use nestex_check::check;

fuzz_target!(|data: &[u8]| {
    // Panic freedom: arbitrary input must always scan to a verdict.
    // The checker expects &str, so convert lossily to also cover inputs
    // that are "almost" text.
    let s = String::from_utf8_lossy(data);
    let _ = check(&s);
});
