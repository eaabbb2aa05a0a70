use std::sync::OnceLock;

use regex::Regex;

fn disallowed() -> &'static Regex {
    static DISALLOWED: OnceLock<Regex> = OnceLock::new();
    DISALLOWED.get_or_init(|| {
        Regex::new(r"[^a-z0-9-]").expect("static pattern is valid")
    })
}

/// Turns an artist name into the slug used for its imageset directory.
///
/// Lowercases, turns spaces into `-` and then drops anything that is not
/// `[a-z0-9-]`. There is no length limit, and two names can map to the same
/// slug.
pub fn sanitize_name(name: &str) -> String {
    let name = name.to_lowercase().replace(' ', "-");
    disallowed().replace_all(&name, "").to_string()
}
