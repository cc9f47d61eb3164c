mod analysis;
mod config;
mod database;
mod report;
