pub mod token;
pub mod webutils;
