//! Standalone exercises that do not belong to a puzzle day

pub mod cidr;
