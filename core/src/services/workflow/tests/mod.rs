//! Test modules for the workflow service

mod service_tests;
