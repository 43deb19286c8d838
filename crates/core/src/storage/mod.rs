pub mod format;
pub mod memory;
pub mod repository;
pub mod traits;

// Backends
#[cfg(not(target_arch = "wasm32"))]
pub mod file;
