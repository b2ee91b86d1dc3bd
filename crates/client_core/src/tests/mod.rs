mod support;

mod validate_tests;
