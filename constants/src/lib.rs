pub mod layout;
pub mod motion;
pub mod palette;
pub mod timing;
