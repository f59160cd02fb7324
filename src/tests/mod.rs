mod engine_tests;
pub(crate) mod region_code;
