pub mod client;
pub mod dto;
pub mod products;
