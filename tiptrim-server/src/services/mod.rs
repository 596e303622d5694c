//! Services shared by the RPC handlers and the provisioning tool

pub mod account;
