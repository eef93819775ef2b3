#![no_main]

use libfuzzer_sys::fuzz_target;
use sln2csproj::parser::{BuildConfiguration, LibraryDescriptor};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(info) = LibraryDescriptor::parse(content) {
            for config in [BuildConfiguration::Debug, BuildConfiguration::Release] {
                if let Some(path) = info.output_path(config) {
                    assert!(!path.trim().is_empty());
                }
            }
        }
    }
});
