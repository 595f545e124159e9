pub mod contact;
pub mod home;
pub mod rating;
pub mod remove;
