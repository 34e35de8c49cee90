mod app;
mod components;
mod screens;
pub mod state;

pub use app::{launch_gui, InventoryApp};
