pub mod algorithms;

pub use algorithms::{block, runic};
