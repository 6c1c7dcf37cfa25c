//! Core citidash library (pages, navigation, data, extraction, config).

pub mod catalog;
pub mod charts;
pub mod config;
pub mod data;
pub mod extract;
pub mod interrupt;
pub mod logging;
pub mod navigation;
pub mod pages;
pub mod selector;
