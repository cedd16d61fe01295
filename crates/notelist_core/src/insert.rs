//! Front-matter aware insertion.
//!
//! The rendered list goes immediately below the note's YAML front-matter
//! block when one is present, and at the very top of the note otherwise.
//! The front matter itself is treated as an opaque delimited block; its
//! contents are never parsed or modified.

/// Insert `list` into `content` right below the front-matter block, or
/// prepend it when the content has no front matter.
pub fn insert_below_frontmatter(content: &str, list: &str) -> String {
    match frontmatter_end(content) {
        Some(idx) => format!("{}{}{}", &content[..idx], list, &content[idx..]),
        None => format!("{}{}", list, content),
    }
}

/// Byte offset just past the closing `---` delimiter line, if the content
/// starts with a front-matter block.
///
/// A block must start with a `---` line at the very beginning of the content
/// and is closed by the earliest following `---` line, LF or CRLF. A closing
/// delimiter on the line directly after the opener (`---\n---\n`) is not
/// recognized, matching the original scanner.
fn frontmatter_end(content: &str) -> Option<usize> {
    if !content.starts_with("---\n") && !content.starts_with("---\r\n") {
        return None;
    }

    let rest = &content[4..]; // Skip first "---\n"
    let lf = rest.find("\n---\n").map(|idx| (idx, 5));
    let crlf = rest.find("\n---\r\n").map(|idx| (idx, 6));

    // Whichever delimiter occurs first closes the block
    [lf, crlf]
        .into_iter()
        .flatten()
        .min_by_key(|(idx, _)| *idx)
        .map(|(idx, len)| 4 + idx + len)
}
