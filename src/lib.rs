pub mod config;
pub mod divided_name;
pub mod divider;
pub mod error;
pub mod normalizer;
pub mod resources;
pub mod table;

pub use config::{
    BasicDividerConfig, DividerConfig, DividerSettings, GbdtDividerConfig, NameDividerVersion,
};
pub use divided_name::DividedName;
pub use divider::{shared_divider, NameDivider, SplitScorer};
pub use error::{DividerError, ResourceError};
pub use normalizer::{NameNormalizer, NfkcNormalizer};
