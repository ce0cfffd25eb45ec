//! Concrete installed-version resolvers

mod dist_info;

pub use dist_info::DistInfoResolver;
