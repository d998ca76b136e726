mod admin_tests;
mod locations_tests;
mod suggestions_tests;
