//! Unit tests for the evaluator, one file per implementation module.
