//! Base32 with an Anglo-Saxon runic alphabet.
//!
//! Bytes are packed five at a time into eight 5-bit values, and each value is
//! written as one of 32 runes from the Unicode Runic block. A short final
//! block is filled out to eight symbols with the padding rune `ᛥ`.
//!
//! ```
//! let encoded = runic32::encode(b"hi");
//! assert_eq!(encoded, "ᛈᚢᛚᛏᛥᛥᛥᛥ");
//! assert_eq!(runic32::decode(&encoded).unwrap(), b"hi");
//! ```

mod core;
mod encoders;

pub mod prelude;

pub use crate::core::alphabet::{Alphabet, PADDING, RUNES};
pub use crate::core::config::{Config, ConfigFile, Settings};
pub use crate::encoders::algorithms::DecodeError;
pub use crate::encoders::block::{BLOCK_SIZE, GROUP_WIDTH, join_block, split_block};
pub use crate::encoders::runic::{decode, decoded_len_upper_bound, encode, encoded_len};
