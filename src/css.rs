//! CSS stylesheet assembly for role decorations.

use crate::gradient::Decoration;
use crate::role::Role;

/// Lowercase a display name into a CSS-friendly slug; runs of
/// non-alphanumerics collapse into single dashes.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

/// One CSS rule for a named decoration.
pub fn rule_named(name: &str, decoration: &Decoration) -> String {
    let slug = slug(name);
    let class = if slug.is_empty() {
        "role".to_string()
    } else {
        format!("role-{slug}")
    };
    let body: String = decoration
        .css()
        .lines()
        .map(|line| format!("  {line}\n"))
        .collect();
    format!(".{class} {{\n{body}}}\n")
}

/// One CSS rule for a role; unnamed roles fall back to their id.
pub fn rule(role: &Role) -> String {
    let decoration = Decoration::new(role.color_one.clone(), role.color_two.clone());
    if slug(&role.name).is_empty() {
        rule_named(&format!("{}", role.id), &decoration)
    } else {
        rule_named(&role.name, &decoration)
    }
}

/// The full stylesheet for a role list, one rule per role in list order.
/// An empty list yields an empty stylesheet.
pub fn stylesheet(roles: &[Role]) -> String {
    roles.iter().map(rule).collect::<Vec<_>>().join("\n")
}
