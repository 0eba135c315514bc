// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod clipboard;
pub mod numeric;
pub mod runtime;
pub mod session;
