pub mod doctor_listing_page;
