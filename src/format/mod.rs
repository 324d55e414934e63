//! Output formatting for price results, suggestions and categories (table, JSON, markdown).

use crate::api::SuggestionResponse;
use crate::category::Category;
use crate::config::OutputFormat;
use crate::models::SearchResult;
use serde::Serialize;

/// Formats results for output.
pub struct Formatter {
    format: OutputFormat,
}

/// Category row used by the JSON listing.
#[derive(Serialize)]
struct CategoryInfo {
    name: &'static str,
    code: &'static str,
    attributes: Vec<&'static str>,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a price search result.
    pub fn format_result(&self, result: &SearchResult) -> String {
        match self.format {
            OutputFormat::Json => self.json(result, "{}"),
            OutputFormat::Table => self.table_result(result),
            OutputFormat::Markdown => self.markdown_result(result),
        }
    }

    /// Formats a suggestion list.
    pub fn format_suggestions(&self, category: &str, suggestions: &[String]) -> String {
        match self.format {
            OutputFormat::Json => self.json(
                &SuggestionResponse { suggestions: suggestions.to_vec() },
                r#"{"suggestions":[]}"#,
            ),
            _ if suggestions.is_empty() => "No suggestions.".to_string(),
            OutputFormat::Table => suggestions
                .iter()
                .enumerate()
                .map(|(i, name)| format!("{:>2}. {}", i + 1, name))
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Markdown => {
                let mut lines = vec![format!("## Suggestions ({})", category), String::new()];
                lines.extend(suggestions.iter().map(|name| format!("- {}", name)));
                lines.join("\n")
            }
        }
    }

    /// Formats the supported categories with their kakaku.com codes.
    pub fn format_categories(&self, categories: &[Category]) -> String {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<CategoryInfo> = categories
                    .iter()
                    .map(|c| CategoryInfo {
                        name: c.as_str(),
                        code: c.kakaku_code(),
                        attributes: c.attributes().iter().map(|a| a.as_str()).collect(),
                    })
                    .collect();
                self.json(&rows, "[]")
            }
            OutputFormat::Table => self.table_categories(categories),
            OutputFormat::Markdown => self.markdown_categories(categories),
        }
    }

    fn json(&self, value: &impl Serialize, fallback: &str) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| fallback.to_string())
    }

    // Table formatting

    fn table_result(&self, result: &SearchResult) -> String {
        let mut lines = vec![
            format!("{:<13}{}", "Product:", result.product),
            format!("{:<13}{}", "Price:", display_price(&result.price)),
            format!("{:<13}{}", "Source:", result.source),
            format!("{:<13}{}", "Image:", result.image),
            format!("{:<13}{}", "Model:", result.model_number),
        ];

        for (attribute, value) in &result.specs {
            lines.push(format!("{:<13}{}", format!("{}:", attribute), value));
        }

        lines.join("\n")
    }

    fn table_categories(&self, categories: &[Category]) -> String {
        let mut lines = vec![
            format!("{:<12}  {:<4}  {}", "Category", "Code", "Attributes"),
            format!("{:-<12}  {:-<4}  {:-<30}", "", "", ""),
        ];

        for category in categories {
            lines.push(format!(
                "{:<12}  {:<4}  {}",
                category.as_str(),
                category.kakaku_code(),
                attribute_list(category)
            ));
        }

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_result(&self, result: &SearchResult) -> String {
        let mut lines = vec![
            format!("## {}", result.product),
            String::new(),
            format!("- **Price:** {}", display_price(&result.price)),
            format!("- **Source:** {}", result.source),
            format!("- **Model:** {}", result.model_number),
        ];

        if result.has_image() {
            lines.push(format!("- **Image:** ![{}]({})", result.product, result.image));
        } else {
            lines.push(format!("- **Image:** {}", result.image));
        }

        if !result.specs.is_empty() {
            lines.push(String::new());
            lines.push("| Spec | Value |".to_string());
            lines.push("|------|-------|".to_string());
            for (attribute, value) in &result.specs {
                lines.push(format!("| {} | {} |", attribute, value));
            }
        }

        lines.join("\n")
    }

    fn markdown_categories(&self, categories: &[Category]) -> String {
        let mut lines =
            vec!["| Category | Code | Attributes |".to_string(), "|---|---|---|".to_string()];

        for category in categories {
            lines.push(format!(
                "| {} | {} | {} |",
                category.as_str(),
                category.kakaku_code(),
                attribute_list(category)
            ));
        }

        lines.join("\n")
    }
}

fn attribute_list(category: &Category) -> String {
    category.attributes().iter().map(|a| a.as_str()).collect::<Vec<_>>().join(", ")
}

/// Renders a yen amount with thousands separators, e.g. "¥17,480".
fn display_price(price: &str) -> String {
    let Ok(amount) = price.parse::<u64>() else {
        return price.to_string();
    };

    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("¥{}", grouped)
}
