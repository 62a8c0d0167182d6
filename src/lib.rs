#![no_std]
extern crate alloc;

pub mod error;
pub mod node;
pub mod nav;

#[cfg(test)]
mod tests;

pub use crate::{
    error::{LiteralError, NotFoundError, ParseError},
    nav::NavPath,
    node::{parse, Expression, Literal, Node, NodeId},
};

pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");
