//! Device collaborators: pickers, the media permission gate and the
//! submission sink

mod fs_picker;
mod permission;
mod sink;
mod traits;

pub use fs_picker::{FsPicker, PHOTO_NAME};
pub use permission::ConfigPermissionGate;
pub use sink::TracingSink;
pub use traits::{
    DocumentPicker, ImagePicker, PermissionGate, PickOutcome, PickRequest, SubmissionSink,
};

#[cfg(test)]
pub use traits::{
    MockDocumentPicker, MockImagePicker, MockPermissionGate, MockSubmissionSink, PickedDocument,
    PickedImage,
};
