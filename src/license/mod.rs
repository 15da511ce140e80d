//! License payload model and validity rules.

pub mod outcome;
pub mod record;
pub mod validity;
