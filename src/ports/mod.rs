// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait seams between the store and the concrete
//! document codecs implemented in the adapters layer.

pub mod codec;

// Re-export commonly used types
pub use codec::ConfigCodec;
