pub mod app_state;
pub mod config;
pub mod detector;
pub mod entities;
pub mod export;
pub mod fetcher;
pub mod health;
pub mod llm;
pub mod normalizer;
pub mod ops;
pub mod pipeline;
pub mod proxy;
