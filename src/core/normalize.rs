/// Canonicalize text for keyword matching
///
/// Lowercases the input and folds the Romanian diacritics (both the comma-below
/// and the legacy cedilla forms) to their base Latin letters. Every other
/// character passes through untouched.
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(fold_diacritic)
        .collect()
}

#[inline]
fn fold_diacritic(c: char) -> char {
    match c {
        'ă' | 'â' => 'a',
        'î' => 'i',
        'ș' | 'ş' => 's',
        'ț' | 'ţ' => 't',
        other => other,
    }
}
