pub mod app;
pub mod clipboard;
pub mod config;
pub mod contract;
pub mod highlight;
pub mod normalize;
pub mod paths;
pub mod request;
pub mod snippets;
