//! # Text preprocessing pipelines
//!
//! - `common`: tokenizer back-ends selected from a resolved `TokenizerClass`, and the `Encode`
//!   capability shared by every tokenizer of the crate
//! - `similarity`: preprocessing helpers of sentence-pair similarity tasks

pub mod common;
pub mod similarity;
