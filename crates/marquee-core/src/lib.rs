pub mod cache;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod deeplink;
pub mod error;
pub mod format;
pub mod model;
pub mod omdb;
pub mod session;
pub mod toast;
pub mod viewer;
