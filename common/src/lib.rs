//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod doctor;
pub mod doctor_payload;
pub mod doctor_display;
pub mod filter_state;
pub mod filter_query;
pub mod filter_pipeline;
pub mod filter_store;
pub mod listing_const;
pub mod error;
