/// Derive an email domain from a company name.
///
/// Example: "Acme Corp" → "acmecorp.com"
pub fn company_email_domain(company: &str) -> String {
    let compact: String = company.to_lowercase().split_whitespace().collect();
    format!("{}.com", compact)
}

/// Truncate a display label to `max_chars`, appending "..." when shortened.
///
/// Example: "Data Analytics Platform" → "Data Analytics " + "..."
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() > max_chars {
        let head: String = label.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        label.to_string()
    }
}

/// First word of a display name, for greetings.
///
/// Example: "Sarah Chen" → "Sarah"
pub fn first_name(name: &str) -> &str {
    name.split(' ').next().unwrap_or(name)
}
