mod block_string_tests;
mod lexer_tests;
mod parser_tests;
mod source_tests;
