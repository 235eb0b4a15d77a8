//! Entities placed in the world

pub mod viewer;

pub use viewer::Viewer;
