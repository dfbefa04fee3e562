pub mod controller;
pub mod countdown;
pub mod ranking;
