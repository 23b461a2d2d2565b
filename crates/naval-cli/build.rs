//! Build script exporting the target triple for version output.

fn main() {
    println!("cargo::rerun-if-changed=build.rs");

    let target = std::env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    println!("cargo::rustc-env=NAVAL_CLI_TARGET={target}");
}
