//! The polls application: questions with choices, voted on over HTTP.

pub mod app_config;
pub mod db;
pub mod orm;
pub mod poll;
pub mod web;
