use once_cell::sync::Lazy;
use tera::Tera;

/// Shared template registry for confirmation pages and newsletter issues.
pub static TEMPLATES: Lazy<Tera> =
    Lazy::new(|| Tera::new("views/**/*").expect("Failed to initialize Tera templates"));
