//! LexiField engine - field naming business logic
//!
//! This crate implements:
//! - Local naming rule set
//! - Validation merge policy (local rules + suggestion provider cross-check)
//! - Masking technique recommendations

pub mod naming;
pub mod validator;
pub mod masking;

pub use naming::NamingRuleSet;
pub use validator::FieldValidator;
pub use masking::{recommend_masking, MaskingTechnique};
