pub mod effect;
pub mod idle;
pub mod landing;
pub mod mapper;
pub mod pointer;
pub mod spring;

pub use effect::*;
pub use idle::*;
pub use landing::*;
pub use mapper::*;
pub use pointer::*;
pub use spring::*;
