use crate::templates::TEMPLATES;

use super::content::Issue;

pub struct RecipientLinks {
    pub subscribe: String,
    pub unsubscribe: String,
}

/// Per-recipient subscribe/unsubscribe links embedded in the issue footer.
/// The email lands in a path segment, so it is fully percent-encoded.
pub fn recipient_links(base_url: &str, email: &str) -> RecipientLinks {
    let encoded = urlencoding::encode(email);

    RecipientLinks {
        subscribe: format!("{base_url}/subscribe/{encoded}"),
        unsubscribe: format!("{base_url}/unsubscribe/{encoded}"),
    }
}

pub fn render_issue(issue: &Issue, links: &RecipientLinks) -> Result<String, tera::Error> {
    let mut ctx = tera::Context::new();
    ctx.insert("edition", issue.edition);
    ctx.insert("main_feature", &issue.main_feature);
    ctx.insert("sections", &issue.sections);
    ctx.insert("subscribe_link", &links.subscribe);
    ctx.insert("unsubscribe_link", &links.unsubscribe);

    TEMPLATES.render("newsletter_issue.html", &ctx)
}
