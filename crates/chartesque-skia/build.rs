// File: crates/chartesque-skia/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Registry lookups (RegOpenKeyExW, RegQueryInfoKeyW) used for system fonts.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
