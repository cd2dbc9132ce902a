pub mod detail;
pub mod panels;
