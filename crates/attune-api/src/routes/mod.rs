pub mod domains;
pub mod health;
pub mod reports;
pub mod submissions;
