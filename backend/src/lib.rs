//! Backend library: loads the doctor directory from the remote endpoint.

pub mod api;
pub mod http_utils;
