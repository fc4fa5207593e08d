pub mod doctors_api;
