//! WASM bindings for the entry tag editor.
//!
//! Server-rendered pages load this module and call `mountTagPage` once the
//! document is ready. Everything else (tag editing, key filtering, expanding
//! text areas, profile toggles) is wired up by the mount.

mod keys;
mod page;
mod types;

pub use keys::*;
pub use page::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Install the panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    // A host page may have installed its own subscriber already.
    let _ = set_global_default(Registry::default().with(wasm_layer));
}
