pub mod login;
pub mod unauthorized;
