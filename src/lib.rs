//! A tiny hardware description language.
//!
//! A `.hw` program declares the inputs, outputs, and latches of a circuit, some
//! boolean function definitions, one update equation per computed signal, and a bit
//! string for every input. [`parse_program`] turns the text into a [`Program`],
//! [`html::render_html`] typesets it, and [`Circuit`] simulates it one cycle at a time:
//!
//! ``` text
//! .hardware shift
//! .inputs A
//! .outputs B
//! .latches L
//! .update
//! L = A
//! B = L'
//! .simulate
//! A = 1100
//! ```
//!
//! Every signal is a single bit. A latch `L` delays its input by one cycle: its
//! output, written `L'`, is `0` at cycle 0 and the value of `L` from the previous
//! cycle afterwards.

#[cfg(test)]
mod tests;

mod ast;
mod circuit;
mod env;
mod error;
mod expr;
mod loc;
mod parse;
mod sim;
mod trace;
pub mod html;
pub mod report;

pub use ast::{Def, Program, Update};
pub use circuit::{latch_output, Circuit};
pub use env::{Definitions, Environment};
pub use error::HdlError;
pub use expr::Expr;
pub use loc::{LineCol, Loc, SourceInfo};
pub use parse::{load_program_from_file, parse_program};
pub use sim::{Sim, SimState};
pub use trace::Trace;

pub(crate) use log::{debug, info, trace, warn};

/// The name of a signal or a definition.
pub type Name = String;
