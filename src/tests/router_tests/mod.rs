mod pages_tests;
mod search_tests;
