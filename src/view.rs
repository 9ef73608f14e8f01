//! HTML rendering of the editor.
//!
//! Produces a self-contained fragment; controls carry `data-action` attributes
//! naming the [`Action`](crate::Action) a host should dispatch when they fire.

use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

use crate::config::ViewConfig;
use crate::editor::IngredientEditor;
use crate::model::{Collection, Field, IngredientRow};

/// Column order of the table, matching the header row
const COLUMNS: [Field; 3] = [Field::Ingredient, Field::Quantity, Field::Unit];

pub fn render(editor: &IngredientEditor, config: &ViewConfig) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"ingredient-editor\">\n");
    let _ = writeln!(html, "  <h4>{}</h4>", encode_text(&config.title));

    render_table(&mut html, editor);
    render_text_entry(&mut html, editor, config);

    let _ = writeln!(
        html,
        "  <button class=\"confirm\" data-action=\"confirm\"{}>Add Ingredients</button>",
        if editor.can_confirm() { "" } else { " disabled" }
    );

    if let Some(notification) = editor.notification() {
        let _ = writeln!(
            html,
            "  <div class=\"alert success\" role=\"alert\">{}<button data-action=\"dismiss\">&times;</button></div>",
            encode_text(notification.message())
        );
    }

    html.push_str("</div>\n");
    html
}

fn render_table(html: &mut String, editor: &IngredientEditor) {
    html.push_str("  <table>\n    <thead>\n      <tr>");
    for heading in ["Ingredient", "Quantity", "Unit", "Actions"] {
        let _ = write!(html, "<th>{}</th>", heading);
    }
    html.push_str("</tr>\n    </thead>\n    <tbody>\n");

    let deletable = editor.can_delete_confirmed();
    for (index, row) in editor.confirmed().iter().enumerate() {
        html.push_str("      <tr class=\"confirmed\">");
        render_cells(html, Collection::Confirmed, index, row);
        html.push_str("<td class=\"actions\">");
        if deletable {
            let _ = write!(
                html,
                "<button class=\"delete\" data-action=\"delete {}\">Delete</button>",
                index
            );
        }
        let _ = write!(
            html,
            "<button class=\"insert\" title=\"Add Row Above\" data-action=\"insert {}\">Add</button>",
            index
        );
        html.push_str("</td></tr>\n");
    }

    for (index, row) in editor.pending().iter().enumerate() {
        html.push_str("      <tr class=\"pending\">");
        render_cells(html, Collection::Pending, index, row);
        html.push_str("<td class=\"actions\"></td></tr>\n");
    }

    html.push_str("    </tbody>\n  </table>\n");
}

fn render_cells(html: &mut String, collection: Collection, index: usize, row: &IngredientRow) {
    for field in COLUMNS {
        let _ = write!(
            html,
            "<td><input type=\"text\" name=\"{}\" data-action=\"edit {} {} {}\" value=\"{}\"></td>",
            field.as_str(),
            collection,
            index,
            field.as_str(),
            encode_double_quoted_attribute(row.get(field))
        );
    }
}

fn render_text_entry(html: &mut String, editor: &IngredientEditor, config: &ViewConfig) {
    html.push_str("  <div class=\"text-entry\">\n");
    // The HTML parser drops one newline right after <textarea>, so emit one
    // to keep text that itself starts with a blank line intact
    let _ = writeln!(
        html,
        "    <textarea rows=\"4\" data-action=\"text\" placeholder=\"{}\">\n{}</textarea>",
        encode_double_quoted_attribute(&config.placeholder),
        encode_text(editor.text())
    );
    html.push_str("    <button class=\"paste\" data-action=\"paste\">Paste</button>\n");
    html.push_str("    <button class=\"clear\" data-action=\"clear\">Clear</button>\n");

    let skipped = editor.malformed_lines().len();
    if config.report_malformed_lines && skipped > 0 {
        let _ = writeln!(
            html,
            "    <p class=\"malformed\">{} {} could not be parsed</p>",
            skipped,
            if skipped == 1 { "line" } else { "lines" }
        );
    }

    html.push_str("  </div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::StaticClipboard;

    fn editor_with_text(text: &str) -> IngredientEditor {
        let mut editor = IngredientEditor::builder()
            .clipboard(StaticClipboard::new(""))
            .build();
        editor.on_text_changed(text);
        editor
    }

    #[test]
    fn test_confirm_disabled_without_pending() {
        let html = render(&editor_with_text(""), &ViewConfig::default());
        assert!(html.contains("data-action=\"confirm\" disabled>"));
    }

    #[test]
    fn test_confirm_enabled_with_pending() {
        let html = render(&editor_with_text("2 cups flour"), &ViewConfig::default());
        assert!(html.contains("data-action=\"confirm\">Add Ingredients"));
        assert!(html.contains("<tr class=\"pending\">"));
    }

    #[test]
    fn test_escapes_user_text() {
        let html = render(
            &editor_with_text("1 <b> \"salt\""),
            &ViewConfig::default(),
        );
        assert!(!html.contains("<b>"));
        assert!(html.contains("value=\"&lt;b&gt;\""));
        assert!(html.contains("value=\"&quot;salt&quot;\""));
    }

    #[test]
    fn test_malformed_note_is_opt_in() {
        let editor = editor_with_text("2 cups flour\nsalt\npepper to taste please");
        let html = render(&editor, &ViewConfig::default());
        assert!(!html.contains("could not be parsed"));

        let config = ViewConfig {
            report_malformed_lines: true,
            ..ViewConfig::default()
        };
        let html = render(&editor, &config);
        assert!(html.contains("2 lines could not be parsed"));
    }
}
