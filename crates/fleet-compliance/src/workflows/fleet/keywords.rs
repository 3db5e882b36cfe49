/// Whole-word (or whole-phrase) keyword test over free-text issue strings.
///
/// Both sides are lowercased and split on anything that is not alphanumeric,
/// so "operating-system" matches "Operating System" while "age" does not
/// match inside "storage".
pub(crate) fn mentions(text: &str, keyword: &str) -> bool {
    let haystack = words(text);
    let needle = words(keyword);
    if needle.is_empty() {
        return false;
    }

    haystack
        .windows(needle.len())
        .any(|window| window == needle.as_slice())
}

pub(crate) fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| mentions(text, keyword))
}

fn words(value: &str) -> Vec<String> {
    value
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_whole_words_only() {
        assert!(mentions("Storage below baseline", "storage"));
        assert!(!mentions("Storage below baseline", "age"));
        assert!(mentions("Device age exceeds 5 years", "age"));
        assert!(!mentions("Program files", "ram"));
    }

    #[test]
    fn matches_phrases_across_punctuation() {
        assert!(mentions("Low disk-space on C:", "disk space"));
        assert!(mentions("Outdated operating system", "operating-system"));
        assert!(!mentions("disk is full, space heater", "disk space"));
        assert!(!mentions("anything", ""));
    }
}
