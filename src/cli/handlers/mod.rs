pub mod alphabet;
pub mod decode;
pub mod encode;
