pub mod audio;
pub mod beatmap;
pub mod config;
pub mod error;
pub mod input;
pub mod persist;
pub mod session;
pub mod text;
pub mod util;

#[cfg(test)]
mod test_utils;
