//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use runic32::prelude::*;
//!
//! let encoded = encode(&[0xFF]);
//! assert!(encoded.ends_with(Alphabet::new().padding()));
//! assert_eq!(decode(&encoded).unwrap(), [0xFFu8]);
//! ```

pub use crate::{Alphabet, DecodeError, PADDING, decode, encode};
