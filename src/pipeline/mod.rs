pub mod collector;
pub mod content;
pub mod generator;
