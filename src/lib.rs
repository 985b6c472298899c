pub mod class;
pub mod cli;
pub mod commands;
pub mod common;
pub mod error;
pub mod mask;
pub mod output;
pub mod output_common;
pub mod radix;
pub mod subnet;
pub mod supernet;
