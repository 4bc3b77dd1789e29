use super::db;

pub mod proptest_arb;
