// File: crates/tideline-render-skia/build.rs
// Summary: Links the Windows system library Skia's font manager needs when targeting Windows.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Registry APIs (RegOpenKeyExW and friends) used by Skia's font lookup.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
