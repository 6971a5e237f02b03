pub mod age;
pub mod repo;
