//! The GraphQL language front end: lexing, parsing, the AST, traversal and
//! printing.
//!
//! ```rust
//! use libgql_parser::parse;
//! use libgql_parser::print;
//!
//! let doc = parse("query Q($id: ID!) { user(id: $id) { name } }").unwrap();
//! assert_eq!(
//!     print(&doc),
//!     "query Q($id: ID!) {\n  user(id: $id) {\n    name\n  }\n}",
//! );
//! ```

pub mod ast;
mod block_string;
mod lexer;
mod parser;
mod printer;
mod source;
mod syntax_error;
pub mod token;
pub mod visitor;

pub use block_string::dedent_block_string_lines;
pub use block_string::is_printable_as_block_string;
pub use block_string::print_block_string;
pub use lexer::GraphQLLexer;
pub use parser::GraphQLParser;
pub use parser::ParseOptions;
pub use parser::ParseResult;
pub use parser::parse;
pub use parser::parse_const_value;
pub use parser::parse_type;
pub use parser::parse_value;
pub use parser::parse_with_options;
pub use printer::PrintNode;
pub use printer::print;
pub use printer::print_string;
pub use source::Source;
pub use source::SourceLocation;
pub use source::print_source_location;
pub use syntax_error::GraphQLSyntaxError;

#[cfg(test)]
mod tests;
