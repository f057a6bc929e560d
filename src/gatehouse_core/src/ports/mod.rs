pub mod gateway;
pub mod ui;
