mod parse_rle;
mod topology;

pub use parse_rle::parse_rle;
pub use topology::Topology;
