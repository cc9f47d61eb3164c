#[path = "../common/mod.rs"]
mod common;

mod wing_tests;
