pub mod check;
pub mod eurlex;
pub mod health;
pub mod updates;
