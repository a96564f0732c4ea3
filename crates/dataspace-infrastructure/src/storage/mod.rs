//! Key-value storage backends

pub mod memory;
pub mod file;

pub use memory::MemoryStorage;
pub use file::FileStorage;
