use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(scopelog_enabled)");
    println!("cargo:rerun-if-changed=build.rs");

    // Evaluated once here so the rest of the crate only checks one cfg.
    let strip = env::var_os("CARGO_FEATURE_STRIP").is_some();
    let release_logging = env::var_os("CARGO_FEATURE_RELEASE_LOGGING").is_some();
    let debug_assertions = env::var_os("CARGO_CFG_DEBUG_ASSERTIONS").is_some();

    if !strip && (debug_assertions || release_logging) {
        println!("cargo:rustc-cfg=scopelog_enabled");
    }
}
