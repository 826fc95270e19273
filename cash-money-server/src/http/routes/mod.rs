//! Plain HTTP routes outside the RPC surface

pub mod health;
