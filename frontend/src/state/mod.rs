pub mod busy;
pub mod sync;
pub mod toast;
