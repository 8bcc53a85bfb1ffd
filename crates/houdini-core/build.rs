// File: crates/houdini-core/build.rs
// Summary: Links the Windows system libraries Skia needs when rasterizing painters.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager queries the registry (RegOpenKeyExW, RegQueryInfoKeyW).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
