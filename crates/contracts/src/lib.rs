//! Wire contracts between the admin back office and its REST API.
//!
//! Every type here mirrors a JSON shape produced by the server. The frontend
//! only reads these records; nothing is mutated locally.

pub mod domain;
pub mod enums;
pub mod shared;
