pub mod app;
pub mod controller;
pub mod drop_zone;
pub mod error;
pub mod image_grid;
pub mod image_search;
pub mod results;
pub mod search_bar;
pub mod text_search;
