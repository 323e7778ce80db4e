//! Load `.env` files into a variable table and read values back with types.
//!
//! [`Store`] is the safe default: it owns its table and mirrors loads into an
//! in-memory map unless given a process-environment mirror.
//!
//! The process-wide loaders ([`load`], [`dotenv`]) mutate the process
//! environment and are `unsafe`, because callers must guarantee no
//! concurrent process-environment access. [`get`] only reads the table.

mod env;
mod error;
mod global;
mod model;
mod parser;
mod store;
mod value;

pub use env::EnvMirror;
pub use error::Error;
pub use global::{dotenv, get, load, try_get, with_store};
pub use model::{Entry, LoadReport};
pub use parser::{parse_reader, parse_str};
pub use store::Store;
pub use value::FromEnvValue;
