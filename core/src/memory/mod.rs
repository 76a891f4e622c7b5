// core/src/memory/mod.rs

//! In-process implementations of every storage port. Used by the tests, the walkthrough
//! example, and the server's `memory` backend.

mod catalog;
mod orders;
mod sessions;
mod shared;
mod users;

pub use catalog::MemoryCatalog;
pub use orders::MemoryOrderStore;
pub use sessions::MemorySessionStore;
pub use users::MemoryUserStore;
