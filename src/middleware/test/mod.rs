use test_utils::context::TestContext;

mod auth;
mod session;
