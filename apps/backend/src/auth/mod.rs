//! Authentication primitives: token codec and credential hasher.

pub mod hasher;
pub mod jwt;
