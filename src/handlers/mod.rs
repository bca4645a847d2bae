//! HTTP handlers, one module per catalog resource.

pub mod directors;
pub mod genres;
pub mod movies;
