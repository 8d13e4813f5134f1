use std::num::NonZeroUsize;

/// Split `text` into consecutive slices of `chunk_size` characters.
///
/// The last slice holds whatever is left over. Boundaries are counted in
/// `char`s so a slice never ends inside a multi-byte character.
pub fn chunk_text(text: &str, chunk_size: NonZeroUsize) -> Vec<&str> {
    let chunk_size = chunk_size.get();
    let mut chunks = Vec::with_capacity(text.len() / chunk_size + 1);
    let mut start = 0;
    let mut count = 0;

    for (index, _) in text.char_indices() {
        if count == chunk_size {
            chunks.push(&text[start..index]);
            start = index;
            count = 0;
        }
        count += 1;
    }

    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}
