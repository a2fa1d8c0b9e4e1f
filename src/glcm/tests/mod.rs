//! Unit tests for the GLCM core

mod matrix_tests;
mod extractor_tests;
