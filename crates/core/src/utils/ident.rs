/// Split `s` into words.
///
/// Word boundaries are runs of non-alphanumeric characters (underscores,
/// hyphens, whitespace, punctuation), a lowercase letter or digit followed by
/// an uppercase letter, and the end of an uppercase run that continues in
/// lowercase, so that acronyms stay whole: `HTTPMethod` is `HTTP` + `Method`.
pub(crate) fn words(s: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(idx, c)) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if let Some(begin) = start.take() {
                words.push(&s[begin..idx]);
            }
            continue;
        }

        let begin = match start {
            Some(begin) => begin,
            None => {
                start = Some(idx);
                continue;
            }
        };

        // `start` is only set while inside a word, so the previous char is alphanumeric
        let prev = chars[i - 1].1;
        let next = chars.get(i + 1).map(|&(_, c)| c);

        let is_boundary = ((prev.is_lowercase() || prev.is_numeric()) && c.is_uppercase())
            || (prev.is_uppercase() && c.is_uppercase() && next.map_or(false, char::is_lowercase));

        if is_boundary {
            words.push(&s[begin..idx]);
            start = Some(idx);
        }
    }

    if let Some(begin) = start {
        words.push(&s[begin..]);
    }

    words
}

/// Fold an arbitrary string into the key shape of the named color table:
/// all words joined without separators, lowercased.
///
/// `"Misty Rose"`, `"misty_rose"`, `"misty-rose"` and `"MistyRose"` all
/// become `"mistyrose"`. Like any identifier, the result never begins with a
/// digit; leading digits are dropped.
pub(crate) fn normalize_identifier(s: &str) -> String {
    let mut buffer = String::with_capacity(s.len());

    for word in words(s) {
        buffer.extend(word.chars().flat_map(char::to_lowercase));
    }

    let leading_digits = buffer
        .find(|c: char| !c.is_numeric())
        .unwrap_or(buffer.len());
    buffer.drain(..leading_digits);

    buffer
}
