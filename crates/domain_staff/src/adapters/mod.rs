//! Store adapters for the staff domain
//!
//! # Available Adapters
//!
//! - **InMemoryStaffStore**: keeps records in a map behind a tokio `RwLock`.
//!   Used by the bridge server and by tests.

pub mod memory;

pub use memory::InMemoryStaffStore;
