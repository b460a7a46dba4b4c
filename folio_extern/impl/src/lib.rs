pub mod http;
pub mod telegram;
