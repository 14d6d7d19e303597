use crate::image_input::blob::ImageBlob;
use std::path::Path;

/// Reads `path` into an [`ImageBlob`]. Files whose content is not a known
/// image format yield `Ok(None)`; only I/O failures are errors.
pub fn read_image_file(path: &Path) -> Result<Option<ImageBlob>, std::io::Error> {
    let bytes = std::fs::read(path)?;
    Ok(sniff_image(bytes, &file_name_of(path)))
}

pub fn sniff_image(bytes: Vec<u8>, file_name: &str) -> Option<ImageBlob> {
    let format = image::guess_format(&bytes).ok()?;
    Some(ImageBlob::new(bytes, format.to_mime_type(), file_name))
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string())
}
