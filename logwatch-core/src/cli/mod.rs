pub mod conf;
pub mod play;
