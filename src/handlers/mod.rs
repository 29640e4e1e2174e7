pub mod echo;
pub mod home;
