pub mod app;
pub mod chemical;
pub mod config;
pub mod domain;
pub mod error;
mod http;
pub mod normalization;
pub mod output;
pub mod pubchem;
pub mod record;
pub mod settings;
pub mod store;
pub mod uniprot;
