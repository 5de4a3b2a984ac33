// RustPixel - Worm
// copyright zipxing@hotmail.com 2022～2025

fn main() {
    if let Err(e) = worm::run() {
        eprintln!("worm: {}", e);
        std::process::exit(1);
    }
}
