//! Test modules for the recognition client
