#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Scanning must never panic, and spans must slice the input
        for block in sln2csproj::split_projects(content) {
            assert_eq!(&content[block.span.clone()], block.raw);
            assert_eq!(&content[block.path_span.clone()], block.rel_path);
        }

        let websites = sln2csproj::parser::parse_websites(&sln2csproj::split_projects(content));
        for website in &websites {
            let _ = website.target_framework.as_str();
        }
    }
});
