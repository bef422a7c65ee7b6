mod db_tests;
mod sort_tests;
mod utils;
mod view_tests;
