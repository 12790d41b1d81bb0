pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod loader;
pub mod pointer;
pub mod renderer;
pub mod surface;
pub mod viewer;
pub mod viewport;
