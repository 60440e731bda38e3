use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(tv_platform)");
    println!("cargo:rerun-if-changed=build.rs");

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let tvos_feature = env::var_os("CARGO_FEATURE_TVOS").is_some();

    // Selects which model table the crate compiles in.
    if target_os == "tvos" || tvos_feature {
        println!("cargo:rustc-cfg=tv_platform");
    }
}
