use serde::{Deserialize, Serialize};

/// The one field of a GitHub release this tool relies on. The tag is the
/// published version, optionally prefixed with "v".
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
pub struct Release {
    pub tag_name: String,
}
