/// Decide which chunks survive.
///
/// A chunk is dropped only if it is CSS-like itself and at least one chunk
/// within `context_window` positions on either side is CSS-like as well.
/// Chunks past either end of the text count as not CSS-like. An isolated
/// CSS-like chunk is kept.
pub fn retain_mask(css_flags: &[bool], context_window: usize) -> Vec<bool> {
    let last = css_flags.len().saturating_sub(1);

    css_flags
        .iter()
        .enumerate()
        .map(|(index, &is_css)| {
            if !is_css {
                return true;
            }

            let lower = index.saturating_sub(context_window);
            let upper = index.saturating_add(context_window).min(last);
            let css_neighbor = (lower..=upper)
                .filter(|&neighbor| neighbor != index)
                .any(|neighbor| css_flags[neighbor]);

            !css_neighbor
        })
        .collect()
}

/// Keep the chunks selected by [`retain_mask`], in their original order.
pub fn filter_chunks<'a>(
    chunks: &[&'a str],
    css_flags: &[bool],
    context_window: usize,
) -> Vec<&'a str> {
    chunks
        .iter()
        .zip(retain_mask(css_flags, context_window))
        .filter_map(|(chunk, keep)| keep.then_some(*chunk))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_chunks, retain_mask};

    #[test]
    fn empty() {
        assert!(retain_mask(&[], 1).is_empty());
    }

    #[test]
    fn single_css_chunk_is_kept() {
        assert_eq!(retain_mask(&[true], 1), vec![true]);
    }

    #[test]
    fn isolated_css_chunk_is_kept() {
        assert_eq!(retain_mask(&[false, true, false], 1), vec![true, true, true]);
    }

    #[test]
    fn css_pairs_are_dropped() {
        assert_eq!(
            retain_mask(&[true, true, false, true, false, true, true, true], 1),
            vec![false, false, true, true, true, false, false, false]
        );
    }

    #[test]
    fn prose_next_to_css_is_kept() {
        assert_eq!(
            retain_mask(&[false, true, true, false], 1),
            vec![true, false, false, true]
        );
    }

    #[test]
    fn wider_context() {
        let flags = [true, false, true, false, false, false, true];
        assert_eq!(retain_mask(&flags, 1), vec![true; 7]);
        assert_eq!(
            retain_mask(&flags, 2),
            vec![false, true, false, true, true, true, true]
        );
    }

    #[test]
    fn zero_context_keeps_everything() {
        assert_eq!(retain_mask(&[true, true, true], 0), vec![true, true, true]);
    }

    #[test]
    fn order_is_preserved() {
        let chunks = ["a", "b", "c", "d", "e"];
        let flags = [false, true, true, false, true];
        assert_eq!(filter_chunks(&chunks, &flags, 1), vec!["a", "d", "e"]);
    }
}
