pub mod screens;
pub mod shared;
