use thiserror::Error;

use crate::model::IngredientRow;

/// A non-blank line that was dropped because it did not have exactly three tokens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line_number} has {token_count} tokens, expected 3")]
pub struct MalformedLine {
    /// 1-based line number in the raw text
    pub line_number: usize,
    pub token_count: usize,
}

/// Rows parsed from a block of text, plus the lines that were skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub rows: Vec<IngredientRow>,
    pub malformed: Vec<MalformedLine>,
}

/// Parse freeform `<quantity> <unit> <ingredient>` lines into rows.
///
/// Lines that do not split into exactly three tokens are dropped.
pub fn parse(text: &str) -> Vec<IngredientRow> {
    parse_with_report(text).rows
}

/// Like [`parse`], but also reports which non-blank lines were dropped
pub fn parse_with_report(text: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for (index, line) in text.split('\n').enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            [quantity, unit, ingredient] => {
                outcome
                    .rows
                    .push(IngredientRow::new(*quantity, *unit, *ingredient));
            }
            [] => {}
            _ => outcome.malformed.push(MalformedLine {
                line_number: index + 1,
                token_count: tokens.len(),
            }),
        }
    }

    outcome
}

/// Write rows back to text: fields space-joined, rows newline-joined
pub fn serialize(rows: &[IngredientRow]) -> String {
    rows.iter()
        .map(IngredientRow::to_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_lines() {
        let rows = parse("2 cups flour\n1 tsp salt");
        assert_eq!(
            rows,
            vec![
                IngredientRow::new("2", "cups", "flour"),
                IngredientRow::new("1", "tsp", "salt"),
            ]
        );
    }

    #[test]
    fn test_parse_garbage_line() {
        assert!(parse("garbage line\n").is_empty());
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_parse_drops_lines_with_extra_tokens() {
        let rows = parse("2 cups plain flour\n3 large eggs");
        assert_eq!(rows, vec![IngredientRow::new("3", "large", "eggs")]);
    }

    #[test]
    fn test_parse_collapses_repeated_whitespace() {
        let rows = parse("  2   cups\tflour  \r\n");
        assert_eq!(rows, vec![IngredientRow::new("2", "cups", "flour")]);
    }

    #[test]
    fn test_parse_keeps_line_order() {
        let rows = parse("1 a x\nbad\n2 b y\n\n3 c z");
        let quantities: Vec<&str> = rows.iter().map(|r| r.quantity.as_str()).collect();
        assert_eq!(quantities, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_report_skips_blank_lines() {
        let outcome = parse_with_report("1 cup milk\n\nsalt\n   \n2 pinches of pepper");
        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(
            outcome.malformed,
            vec![
                MalformedLine {
                    line_number: 3,
                    token_count: 1
                },
                MalformedLine {
                    line_number: 5,
                    token_count: 4
                },
            ]
        );
    }

    #[test]
    fn test_malformed_line_message() {
        let line = MalformedLine {
            line_number: 2,
            token_count: 4,
        };
        assert_eq!(line.to_string(), "line 2 has 4 tokens, expected 3");
    }

    #[test]
    fn test_serialize_rows() {
        let rows = vec![
            IngredientRow::new("2", "cups", "flour"),
            IngredientRow::new("1", "tsp", "salt"),
        ];
        assert_eq!(serialize(&rows), "2 cups flour\n1 tsp salt");
        assert_eq!(serialize(&[]), "");
    }

    #[test]
    fn test_row_count_matches_well_formed_lines() {
        let inputs = [
            "a b c\nd e\nf g h i\nj k l",
            "\n\n\n",
            "one two three",
            "x y z\r\nx y z\r\n",
        ];
        for text in inputs {
            let expected = text
                .split('\n')
                .filter(|l| l.split_whitespace().count() == 3)
                .count();
            assert_eq!(parse(text).len(), expected, "input: {:?}", text);
        }
    }
}
