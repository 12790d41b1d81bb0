pub mod canvas;
pub mod gallery;
pub mod menu_bar;
pub mod status;
