//! Algorithm implementations for the matching workflow
//!
//! This module contains the control-treatment matching pipeline.

pub mod matching;
