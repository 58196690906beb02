pub mod artifact;
pub mod event;
pub mod object;
pub mod size;

pub use artifact::{ResizedArtifact, Summary};
pub use event::{RecordBucket, RecordObject, RecordS3, TriggerEvent, TriggerRecord};
pub use object::ObjectRef;
pub use size::{SizeSpec, SIZE_SPECS};
