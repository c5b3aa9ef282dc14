mod count;

pub use count::parse_count;
