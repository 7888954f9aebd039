/// Content type for schema documents, distinct from generic JSON so
/// consumers can recognize schema semantics.
pub const SCHEMA_JSON: &str = "application/schema+json";

/// Map a storage key's suffix to a MIME type, most specific rule first.
/// Total: unrecognized suffixes fall back to octet-stream.
pub fn content_type_for(key: &str, schema_prefix: &str) -> &'static str {
    if key.starts_with(schema_prefix) && key.ends_with(".json") {
        return SCHEMA_JSON;
    }

    match key.rsplit_once('.').map(|(_, ext)| ext) {
        Some("json") => "application/json",
        Some("md") => "text/markdown; charset=utf-8",
        Some("gz") => "application/gzip",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_json_outranks_generic_json() {
        assert_eq!(content_type_for("schemas/a/b.json", "schemas/"), SCHEMA_JSON);
        assert_eq!(
            content_type_for("versions/3/data.json", "schemas/"),
            "application/json"
        );
    }

    #[test]
    fn known_extensions() {
        assert_eq!(
            content_type_for("docs/readme.md", "schemas/"),
            "text/markdown; charset=utf-8"
        );
        assert_eq!(content_type_for("bundle.tar.gz", "schemas/"), "application/gzip");
        assert_eq!(content_type_for("logo.png", "schemas/"), "image/png");
        assert_eq!(content_type_for("photo.jpg", "schemas/"), "image/jpeg");
        assert_eq!(content_type_for("photo.jpeg", "schemas/"), "image/jpeg");
        assert_eq!(content_type_for("anim.gif", "schemas/"), "image/gif");
        assert_eq!(content_type_for("icon.svg", "schemas/"), "image/svg+xml");
        assert_eq!(content_type_for("hero.webp", "schemas/"), "image/webp");
    }

    #[test]
    fn everything_else_is_octet_stream() {
        assert_eq!(
            content_type_for("versions/3/app.js", "schemas/"),
            "application/octet-stream"
        );
        assert_eq!(content_type_for("no_extension", "schemas/"), "application/octet-stream");
        assert_eq!(content_type_for("", "schemas/"), "application/octet-stream");
    }

    #[test]
    fn schema_key_without_json_suffix_uses_extension_rules() {
        assert_eq!(content_type_for("schemas/notes.md", "schemas/"), "text/markdown; charset=utf-8");
    }
}
