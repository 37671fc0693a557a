mod play;
mod simulate;
mod suggest;

pub use play::run_play;
pub use simulate::run_simulate;
pub use suggest::run_suggest;
