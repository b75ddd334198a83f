use crate::document::Document;
use crate::error::Result;
use crate::separator;

/// Soft-wrap `text` at `column` by turning spaces into newlines
///
/// Only single characters are swapped, so the character count never changes.
/// Words longer than `column` are left on their own line.
pub fn wrap_text(text: &str, column: usize) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let mut line_start = 0;
    let mut last_space = None;

    for i in 0..chars.len() {
        match chars[i] {
            '\n' => {
                line_start = i + 1;
                last_space = None;
                continue;
            }
            ' ' => last_space = Some(i),
            _ => {}
        }
        if i - line_start >= column {
            if let Some(space) = last_space.take() {
                chars[space] = '\n';
                line_start = space + 1;
            }
        }
    }

    chars.into_iter().collect()
}

/// Wrap every chunk body between the separators in `begin..end`
pub fn fill_chunks(doc: &mut Document, begin: usize, end: usize, column: usize) -> Result<()> {
    let separators = separator::find_all(doc, begin..end);
    for pair in separators.windows(2) {
        let body = pair[0].range.end..pair[1].range.start;
        let text = doc.slice(body.clone())?;
        let wrapped = wrap_text(&text, column);
        if wrapped != text {
            doc.replace(body, &wrapped)?;
        }
    }
    Ok(())
}
