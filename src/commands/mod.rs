pub mod add;
pub mod clear;
pub mod current;
pub mod init;
pub mod repo;
pub mod start;
