pub mod admin;
pub mod auth;
pub mod gallery;
pub mod pages;
