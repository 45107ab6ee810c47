//! Style resolution and the vision-analysis prompt template.

use atelier_types::StyleCatalog;

/// Compose the fixed-template analysis instruction for the vision request.
///
/// Missing or unrecognized tags resolve through the catalog's
/// "paper"/"moderate" fallback; the raw tags (post-default) are still
/// interpolated into the trailing format instruction.
pub fn build_analysis_prompt(
    catalog: &StyleCatalog,
    art_style: Option<&str>,
    style_intensity: Option<&str>,
) -> String {
    let descriptor = catalog.descriptor(art_style, style_intensity);
    let art_style = art_style.unwrap_or(StyleCatalog::DEFAULT_STYLE);
    let style_intensity = style_intensity.unwrap_or(StyleCatalog::DEFAULT_INTENSITY);

    format!(
        "Analyze this image and describe the subject in detail for creating a {descriptor}. Focus on:\n\
         1. The main subject (person, object, scene)\n\
         2. Key facial features, expressions, and characteristics\n\
         3. Clothing, accessories, or notable elements\n\
         4. The overall mood and composition\n\
         \n\
         Create a detailed description that will be used to generate a {art_style} style image. \
         The composition should fuse realism and abstract expressionism.\n\
         \n\
         Format your response as a single descriptive paragraph suitable for image generation, \
         starting with \"A {style_intensity} {art_style} art style illustration of\""
    )
}
