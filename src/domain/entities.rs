pub mod hobby;
pub mod message;
pub mod post;
pub mod project;
pub mod timestamp;
