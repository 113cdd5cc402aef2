use log::debug;

use crate::config::ParserMode;
use crate::model::{RecipeIngredient, RecipeIngredientsRaw};

/// Parse one serialized ingredient list literal into its raw tokens.
///
/// `ingredients` strings are expected in the form:
///
/// ```text
/// ['ingredient1', 'ingredient2', 'ingredient3']
/// ```
///
/// Tokens are returned untrimmed and unfiltered; the explode stage applies
/// the whitespace trim and the artifact filter. Malformed bracket or quote
/// structure never raises, it just yields whatever tokens fall out.
pub fn parse_ingredient_list(raw: &str, mode: ParserMode) -> Vec<String> {
    match mode {
        ParserMode::Structured => parse_structured(raw),
        ParserMode::Legacy => parse_legacy(raw),
    }
}

/// Quote-aware scanner. Strips one verified leading `[` and trailing `]`,
/// then reads items delimited by single or double quotes, honoring
/// backslash escapes. Unquoted runs are taken up to the next comma.
/// Ingredient text containing a literal comma survives intact because bare
/// commas only separate items outside of quotes.
fn parse_structured(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let body = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    let mut items = Vec::new();
    let mut chars = body.chars().peekable();
    loop {
        // skip whitespace and commas between items
        while matches!(chars.peek(), Some(c) if c.is_whitespace() || *c == ',') {
            chars.next();
        }
        let Some(&first) = chars.peek() else {
            break;
        };

        let mut item = String::new();
        if first == '\'' || first == '"' {
            chars.next();
            while let Some(c) = chars.next() {
                match c {
                    '\\' => {
                        // unescape \' \" and \\ inside the item
                        if let Some(escaped) = chars.next() {
                            item.push(escaped);
                        }
                    }
                    c if c == first => break,
                    c => item.push(c),
                }
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c == ',' {
                    break;
                }
                item.push(c);
                chars.next();
            }
        }
        items.push(item);
    }
    items
}

/// The original crude tokenizer, preserved bit-for-bit: remove every `[`
/// and `]` character, then split on the two-character sequence backslash +
/// single-quote. Leaves artifact tokens (empty strings, lone commas,
/// dangling quote characters) where the split boundaries fall next to
/// structural punctuation; the explode stage filters the known patterns.
fn parse_legacy(raw: &str) -> Vec<String> {
    raw.replace(['[', ']'], "")
        .split("\\'")
        .map(str::to_string)
        .collect()
}

/// Explode each recipe's token sequence into one row per ingredient.
///
/// Every token is trimmed of leading and trailing whitespace; rows whose
/// trimmed token is empty or exactly a single comma are dropped. The
/// `index` column is reassigned as a fresh contiguous 0-based row number in
/// recipe-major, token-minor post-filter order, while `recipes_index` is
/// replicated from the source row.
pub fn normalise_ingredients(
    rows: &[RecipeIngredientsRaw],
    mode: ParserMode,
) -> Vec<RecipeIngredient> {
    let mut exploded = Vec::new();
    for row in rows {
        for token in parse_ingredient_list(&row.ingredients, mode) {
            let token = token.trim();
            if token.is_empty() || token == "," {
                continue;
            }
            exploded.push(RecipeIngredient {
                index: exploded.len() as i64,
                recipes_index: row.recipes_index,
                ingredients: token.to_string(),
            });
        }
    }
    debug!(
        "exploded {} ingredient lists into {} rows",
        rows.len(),
        exploded.len()
    );
    exploded
}
