//! Tiny behavior tree library with statically typed payload projection.
//!
//! This library composes decision/control logic as a tree of typed nodes that
//! are ticked synchronously once per control cycle, aimed at agents, game AI,
//! and embedded control loops.
//!
//! - **Typed payloads**: every node declares an ordered list of input types
//!   and receives mutable borrows of exactly those inputs on each tick
//! - **Payload projection**: a subtree can operate on a narrower or
//!   differently shaped payload than its ancestor via [`Peel`] nodes, checked
//!   entirely at compile time with no reflection or boxing of payload values
//! - **No inter-tick state**: every tick starts fresh from the root; the
//!   composites discriminate only `Failure`/`Success` and pass `Running` and
//!   `Idle` through (see [`composite`] for why)
//! - **Single-threaded**: a tick is one ordinary synchronous call stack
//!
//! # Architecture
//!
//! - [`Payload`]: type-level description of a node's ordered input list
//! - [`Node`]: core trait for all nodes, one `tick` operation
//! - [`Status`]: four-valued tick outcome (Idle, Running, Success, Failure)
//! - Composite nodes: [`Sequence`], [`Fallback`]
//! - Projection node: [`Peel`]
//! - Decorator nodes: [`Inverter`], [`AlwaysSucceed`]
//! - [`Tree`]: owning handle and entry point, `tick_root` per control cycle

pub mod builder;
pub mod composite;
pub mod decorator;
pub mod node;
pub mod payload;
pub mod peel;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use composite::{Fallback, Sequence};
pub use decorator::{AlwaysSucceed, Inverter};
pub use node::Node;
pub use payload::Payload;
pub use peel::{Peel, ProjectFn};
pub use status::Status;
pub use tree::Tree;
