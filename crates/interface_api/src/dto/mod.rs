//! Request and response bodies

pub mod dates;
pub mod nic;
pub mod staff;
