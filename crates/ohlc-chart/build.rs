// File: crates/ohlc-chart/build.rs
// Summary: Links the Windows system library Skia's font manager needs when rasterizing labels.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's DirectWrite font lookup calls RegOpenKeyExW and friends.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
