#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Parsing, validation and chain assembly must reject bad input without panicking.
    if let Ok(cfg) = toml::from_str::<logchain_config::Config>(data) {
        if let Ok(builder) = logchain_core::ChainBuilder::from_config(&cfg) {
            let _ = builder.try_build();
        }
    }
});
