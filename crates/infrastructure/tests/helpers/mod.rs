#![allow(unused_imports)]

mod upstream_mock;

pub use upstream_mock::*;
