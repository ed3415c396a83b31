pub(crate) mod app;
pub(crate) mod render;
pub(crate) mod screens;
pub(crate) mod theme;
pub(crate) mod util;


#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
