#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

use sln2csproj::generator::rewrite_manifest;
use sln2csproj::parser::{parse_websites, split_projects};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let sln_dir = Path::new("/work/sol");
        let out_dir = Path::new("/work/sol/tools/_intellisense/Site");

        for website in parse_websites(&split_projects(content)) {
            let descriptor = out_dir.join("Site.intellisense.csproj");
            let rewritten = rewrite_manifest(content, sln_dir, out_dir, &website, &descriptor);

            // Rewriting and rescanning must never panic
            let _ = split_projects(&rewritten);
        }
    }
});
