pub mod result_area;

pub use result_area::*;
