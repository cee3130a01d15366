#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(descriptor) = wheelwright::resolve(content) {
            assert!(!descriptor.normalized_name.contains('-'));
            assert!(descriptor.artifact_path.starts_with("dist/"));
            assert!(descriptor.artifact_path.ends_with("-py3-none-any.whl"));
        }
    }
});
