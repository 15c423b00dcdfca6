//! Request handlers, one module per route group

pub mod dates;
pub mod health;
pub mod nic;
pub mod staff;
