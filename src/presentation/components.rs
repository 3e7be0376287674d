pub mod about;
pub mod generator;
pub mod status_bar;
pub mod tab_bar;
