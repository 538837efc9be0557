pub mod cli;
pub mod mapper;
pub mod operators;
pub mod output;
pub mod value;

pub use mapper::{translate, Translation};
pub use output::{to_json, to_json_pretty};
pub use value::{Node, Value};
