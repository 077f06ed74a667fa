pub mod cli;
pub mod conf;
pub mod logging;
pub mod monitor;
pub mod playback;
pub mod reorder;
pub mod source;
pub mod stats;
