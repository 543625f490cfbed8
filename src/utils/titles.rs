/// Canonicalizes a wiki page title: uppercase the first character and
/// replace underscores with spaces
///
/// # Examples
///
/// ```
/// use wiki_dump_reader::normalize_title;
///
/// assert_eq!(normalize_title("foo_bar"), "Foo bar");
/// ```
pub fn normalize_title(title: &str) -> String {
    let mut chars = title.chars();
    match chars.next() {
        Some(first) => {
            // to_uppercase may expand to more than one char (e.g. "ß" -> "SS")
            first.to_uppercase().chain(chars).collect::<String>().replace('_', " ")
        }
        None => String::new(),
    }
}
