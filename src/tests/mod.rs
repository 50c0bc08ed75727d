mod api_tests;
mod capacity_tests;
mod config_tests;
