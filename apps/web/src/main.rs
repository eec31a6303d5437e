// Trunk entry point. Native builds are no-ops; the page script needs `--features web`
// on wasm32.

fn main() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    if let Err(err) = tour_web::start() {
        tracing::error!(error = %err, "Page interactions failed to start");
    }
}
