/// Full container image reference for `image` at `version`.
///
/// A version containing `sha256:` is a digest and is joined with `@`,
/// anything else is treated as a tag.
pub fn image_name(image: &str, version: &str) -> String {
    if version.contains("sha256:") {
        format!("{}@{}", image, version)
    } else {
        format!("{}:{}", image, version)
    }
}
