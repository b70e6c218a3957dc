pub mod token;

pub use token::{ClaimSet, TokenKind, TokenPair};
