mod enum_type_tests;
mod graphql_type_tests;
mod scalar_type_tests;
mod thunk_tests;
