#![allow(dead_code, unused_imports)]

pub(crate) mod test_context;

pub(crate) use test_context::TestContext;
pub(crate) use yaml_lint::assert_lint_clean;
