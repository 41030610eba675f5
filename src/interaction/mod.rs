pub mod click;
pub mod follow;
pub mod session;
