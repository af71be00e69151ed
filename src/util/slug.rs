/// Derives a URL slug from a tour name.
///
/// Lowercases ASCII alphanumerics and collapses every other run of
/// characters into a single hyphen, trimming leading and trailing hyphens.
/// Invoked by the repository layer on every write that touches the name, so
/// the slug never drifts from the name it was derived from.
///
/// # Arguments
/// - `name` - The tour name to derive a slug from
///
/// # Returns
/// - `String` - The derived slug, e.g. `"The Forest Hiker"` -> `"the-forest-hiker"`
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
