/// Split raw document text into terms on whitespace.
///
/// Terms are kept verbatim: no case folding, punctuation stripping, or stemming,
/// so "Gettysburg" and "gettysburg," hash to unrelated features.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("the cat  sat\tdown\n");
        assert_eq!(t, vec!["the", "cat", "sat", "down"]);
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t ").is_empty());
    }
}
