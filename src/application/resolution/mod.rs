//! Market resolution: description parsing, per-kind resolvers and the
//! engine that dispatches between them.

pub mod deadline;
pub mod engine;
pub mod parser;
pub mod price;
pub mod sports;
