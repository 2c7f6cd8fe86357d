pub mod api_key;
pub mod app;
pub mod config;
pub mod llm;
pub mod normalize;
pub mod paths;
