mod management;

pub use management::*;
