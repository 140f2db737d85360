pub mod cidr;
pub mod range;
