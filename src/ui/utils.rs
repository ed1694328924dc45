/// Clip or space-pad `text` to exactly `width` characters.
/// Uses `chars()` so multi-byte UTF-8 strings are measured in characters, not bytes.
pub(crate) fn fit_width(text: &str, width: usize) -> String {
    let mut fitted: String = text.chars().take(width).collect();
    let len = fitted.chars().count();
    fitted.extend(std::iter::repeat(' ').take(width - len));
    fitted
}

#[cfg(test)]
mod tests {
    use super::fit_width;

    #[test]
    fn short_text_is_padded() {
        assert_eq!(fit_width("abc", 6), "abc   ");
    }

    #[test]
    fn long_text_is_clipped() {
        assert_eq!(fit_width("abcdefgh", 3), "abc");
    }

    #[test]
    fn multibyte_text_counts_characters() {
        assert_eq!(fit_width("→→→→", 2), "→→");
        assert_eq!(fit_width("→", 3), "→  ");
    }

    #[test]
    fn zero_width_is_empty() {
        assert_eq!(fit_width("abc", 0), "");
        assert_eq!(fit_width("", 0), "");
    }
}
