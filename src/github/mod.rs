pub mod client;
pub mod parse;
