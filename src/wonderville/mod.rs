pub mod api;
pub mod document;
pub mod dto;
pub mod model;
pub mod normalizer;
