pub mod forecast;
pub mod meteoblue;
pub mod telegram;
