pub mod app;
pub mod exec;
pub mod input;
pub mod menu;
pub mod nav;
pub mod ui;
