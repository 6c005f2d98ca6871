//! Token types produced by the [`GraphQLLexer`](crate::GraphQLLexer).

#[allow(clippy::module_inception)]
mod token;
mod token_kind;

pub use token::GraphQLToken;
pub use token_kind::TokenKind;
