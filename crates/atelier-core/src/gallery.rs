//! Image gallery listing.
//!
//! Lists the configured images directory, keeping only image files and
//! sorting by numeric filename prefix. Deployments without a local images
//! directory (serverless) get a static numbered list instead.

use std::path::Path;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];
const STATIC_LISTING_SIZE: u32 = 50;

/// List available image identifiers.
///
/// Directory present: file names filtered to png/jpg/jpeg, numeric-prefix
/// sorted. Directory absent or unreadable: the static "001".."050" list.
pub async fn list_images(dir: &Path) -> Vec<String> {
    let Ok(mut entries) = tokio::fs::read_dir(dir).await else {
        return static_listing();
    };

    let mut names = Vec::new();
    while let Ok(Some(entry)) = entries.next_entry().await {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if has_image_extension(name) {
            names.push(name.to_string());
        }
    }

    names.sort_by_key(|name| (numeric_prefix(name).unwrap_or(u32::MAX), name.clone()));
    names
}

/// Static fallback: zero-padded identifiers "001".."050".
pub fn static_listing() -> Vec<String> {
    (1..=STATIC_LISTING_SIZE).map(|i| format!("{:03}", i)).collect()
}

fn has_image_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

fn numeric_prefix(name: &str) -> Option<u32> {
    let digits: String = name.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}
