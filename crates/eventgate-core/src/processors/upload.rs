use tracing::debug;

use crate::email::EmailAddress;
use crate::envelope::{Envelope, FileUploadData};
use crate::errors::Rejection;
use crate::event::{field, require_fields, trim_space, EventObject};
use crate::events::FileUploadEvent;
use crate::policy::StorageClass;

const REQUIRED: [&str; 4] = ["file_name", "size_bytes", "bucket", "uploader"];

/// Validates and normalizes a `FILE_UPLOAD` event.
pub fn parse(event: &EventObject) -> Result<FileUploadEvent, Rejection> {
    require_fields(event, &REQUIRED)?;

    let file_name = field(event, "file_name")?
        .as_str()
        .ok_or_else(|| Rejection::wrong_type("file_name", "string"))?;

    // `as_u64` rejects negatives, floats and booleans alike.
    let size_bytes = field(event, "size_bytes")?
        .as_u64()
        .ok_or_else(|| Rejection::wrong_type("size_bytes", "non-negative integer"))?;

    let bucket = field(event, "bucket")?
        .as_str()
        .ok_or_else(|| Rejection::wrong_type("bucket", "string"))?;

    let uploader = field(event, "uploader")?
        .as_str()
        .and_then(|s| EmailAddress::parse(s).ok())
        .ok_or(Rejection::Invalid("uploader email"))?;

    Ok(FileUploadEvent {
        file_name: trim_space(file_name).to_string(),
        size_bytes,
        bucket: bucket.to_lowercase(),
        uploader: uploader.to_lowercase(),
    })
}

/// Picks the storage class for the upload.
pub fn process(event: &FileUploadEvent) -> Envelope {
    let storage_class = StorageClass::for_size(event.size_bytes);
    debug!(
        bucket = %event.bucket,
        size_bytes = event.size_bytes,
        %storage_class,
        "upload accepted"
    );

    Envelope::ok(
        "Upload processed",
        FileUploadData {
            file_name: event.file_name.clone(),
            size_bytes: event.size_bytes,
            bucket: event.bucket.clone(),
            uploader: event.uploader.clone(),
            storage_class,
        },
    )
}
