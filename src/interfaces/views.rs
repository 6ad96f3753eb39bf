pub mod blog;
pub mod contact;
pub mod home;
pub mod layout;
pub mod pages;
pub mod projects;

pub use layout::{render_page, Layout, Template};
