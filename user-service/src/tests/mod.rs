mod routes_tests;
mod utils;
