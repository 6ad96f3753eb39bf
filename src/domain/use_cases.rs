pub mod blog;
pub mod contact;
pub mod extractors;
pub mod projects;
