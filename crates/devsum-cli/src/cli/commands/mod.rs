//! CLI command handlers. Each command is in its own file.

mod changed;
mod device;
mod host;
mod report;

pub use changed::run_changed;
pub use device::run_device;
pub use host::run_host;
