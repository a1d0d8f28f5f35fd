pub mod demo;
pub mod explorer;
