use std::sync::LazyLock;
use std::time::Instant;

pub mod io;
pub mod listener;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
