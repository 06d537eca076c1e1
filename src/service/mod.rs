// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration store implementations.

pub mod shared;
pub mod store;

// Re-export services
pub use shared::SharedConfigStore;
pub use store::{ConfigStore, ConfigStoreBuilder};
