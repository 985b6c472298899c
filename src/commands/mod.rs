pub mod handle_subnet;
pub mod handle_supernet;
