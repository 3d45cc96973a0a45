//! Types and pure logic shared by the console frontend and backend.

pub mod system;
