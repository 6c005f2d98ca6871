mod graphql_tests;
