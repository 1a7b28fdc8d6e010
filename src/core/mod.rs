pub mod lookup;
pub mod output;

pub use crate::domain::model::{DomainMetadata, LookupResult};
pub use crate::domain::ports::DomainMetadataSource;
pub use crate::utils::error::Result;
