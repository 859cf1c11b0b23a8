pub mod engine;
pub mod loader;
pub mod model;
pub mod reservation;
pub mod translate;
pub mod view;
