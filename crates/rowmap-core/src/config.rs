use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// MapperConfig
///
/// Request defaults applied by a `RowMapper`. Missing keys take their
/// defaults when deserialized.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Versions requested by get and range reads.
    pub max_versions: u32,

    /// Row existence condition for inserts without an auto-increment key.
    pub insert_condition: RowExistence,

    /// Default row limit for range requests.
    pub range_limit: Option<u32>,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            max_versions: 1,
            insert_condition: RowExistence::ExpectNotExist,
            range_limit: None,
        }
    }
}

///
/// RowExistence
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowExistence {
    #[display("ignore")]
    Ignore,

    #[display("expect_exist")]
    ExpectExist,

    #[default]
    #[display("expect_not_exist")]
    ExpectNotExist,
}
