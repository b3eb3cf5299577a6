#![no_main]

use libfuzzer_sys::fuzz_target;
use sitepro_core::DashboardConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(config) = DashboardConfig::from_json_str(text) {
            let json = config.to_json_string().expect("serializable");
            assert_eq!(DashboardConfig::from_json_str(&json).ok(), Some(config));
        }
    }
});
