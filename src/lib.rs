pub mod advice;
pub mod api;
pub mod app;
pub mod chart;
pub mod components;
pub mod config;
pub mod csv_import;
pub mod ledger;
pub mod locale;
pub mod onboarding;
pub mod pages;
pub mod route;
pub mod session;
