pub mod audiobook;
pub mod health;
pub mod page;
