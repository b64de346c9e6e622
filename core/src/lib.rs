extern crate either;
extern crate log;
extern crate nalgebra;
extern crate num_traits;
#[macro_use]
extern crate num_derive;
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
extern crate rand;

pub mod board;
pub mod error;
pub mod geo;
pub mod grid;
pub mod queue;
pub mod search;
pub mod sight;

pub use self::board::{ Board, Element, EdgeId, NodeId };
pub use self::error::{ Error, Result };
