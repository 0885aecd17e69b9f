#![warn(missing_docs)]

//! # `alphatree`
//!
//! A checker for [alphabet trees](http://codegolf.stackexchange.com/questions/35862/make-me-an-alphabet-tree):
//! ASCII diagrams in which 23 capital letters, each written once, hang together as a single tree.
//! Check a diagram with [`verify()`] (or [`try_verify`] for a fallible line source such as those in [`source`]) and print the [`Report`].
//!
//! # Rules
//! A diagram has at most 30 lines of at most 29 characters, using only spaces and the [`Letter`]s (every capital but `B`, `D` and `O`).
//! Each letter appears exactly once.
//!
//! Every letter's glyph has a fixed set of diagonal strokes, its [`Connection`]s.
//! Two letters on diagonally adjacent cells are joined when each has a stroke pointing at the other;
//! for example `A` reaches down-left and down-right, and `V` reaches up-left and up-right, so
//!
//! ```text
//!  A
//! V
//! ```
//!
//! is joined while the same letters swapped are not.
//! All letters of a valid diagram must be joined into one tree.
//!
//! # Internals
//! The diagram's lines are captured into a [`Grid`] and each letter becomes a [`Node`](grid::Node).
//! Joins are materialised as an undirected graph in a [`Forest`], whose connected components are the [`Tree`]s.
//! Each tree is then redrawn on its own with `/` and `\` strokes between joined letters.

pub use connection::Connection;
pub use forest::{Forest, Tree};
pub use grid::Grid;
pub use letter::Letter;
pub use location::Location;
pub use validator::Problem;
pub use verify::{try_verify, verify, Report};

pub mod connection;
pub mod forest;
pub mod grid;
pub mod letter;
pub(crate) mod location;
pub mod render;
pub mod source;
pub mod validator;
pub mod verify;
#[cfg(feature = "wasm")]
pub mod wasm;
