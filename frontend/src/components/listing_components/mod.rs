pub mod search_bar;
pub mod filter_panel;
pub mod doctor_result_list;
pub mod doctor_card;
