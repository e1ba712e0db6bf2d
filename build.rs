// RustPixel
// copyright zipxing@hotmail.com 2022～2025

fn main() {
    use cfg_aliases::cfg_aliases;

    cfg_aliases! {
        // Platform aliases
        wasm: { target_arch = "wasm32" },
        native: { not(wasm) },

        // Logging back-end for native builds
        file_log: { all(native, feature = "log4rs") },
    }
}
