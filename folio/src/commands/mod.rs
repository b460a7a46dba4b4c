pub mod contact;
pub mod serve;
