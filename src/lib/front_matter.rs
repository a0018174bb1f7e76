/// Split a source page into its `---`-fenced front matter and the body.
///
/// Mirrors a three-way split on the literal `---` marker: the fenced block
/// is whatever sits between the first two markers, the body is everything
/// after the second one (empty when the closing fence is missing). Returns
/// `None` when the text does not begin with a fence. The block is returned
/// verbatim and never parsed.
pub fn split(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix("---")?;
    match rest.split_once("---") {
        Some((front, body)) => Some((front, body)),
        None => Some((rest, "")),
    }
}
