/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{CONFIG_FILE, find_ride_config, load_ride_config, resolve_config};
pub use types::RideConfig;
