pub mod blog;
pub mod contact;
pub mod home;
pub mod html;
pub mod pages;
pub mod projects;
