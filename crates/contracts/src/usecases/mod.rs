//! Workflows run by the backend on behalf of the pages

pub mod common;
pub mod u501_start_cycle_count;
pub mod u502_start_preparation;
pub mod u503_print_load_label;
pub mod u504_print_delivery_note;
