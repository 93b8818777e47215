//! Combination rule table errors.

/// Errors raised while loading or compiling the combination rule table.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid rule table: {0}")]
    Parse(String),

    #[error("Unknown zone \"{zone}\" in rule for \"{main_oil}\"")]
    UnknownZone { main_oil: String, zone: String },

    #[error("Rule for \"{main_oil}\" has no companion oils")]
    NoCompanions { main_oil: String },

    #[error("Rule for \"{main_oil}\" lists companion \"{companion}\" more than once")]
    DuplicateCompanion { main_oil: String, companion: String },

    #[error("Rule for \"{main_oil}\" has no result texts")]
    NoResults { main_oil: String },
}
