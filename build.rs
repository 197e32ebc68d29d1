fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Framework link flags only apply when building for macOS; everything
    // that touches IOKit is cfg-gated on target_os in the source.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("macos") {
        println!("cargo:rustc-link-search=framework=/System/Library/Frameworks");
        println!("cargo:rustc-link-lib=framework=IOKit");
        println!("cargo:rustc-link-lib=framework=CoreFoundation");
    }
}
