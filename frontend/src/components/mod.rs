pub mod navbar;
pub mod error_boundary;
pub mod suspend_boundary;
pub mod listing_components;
