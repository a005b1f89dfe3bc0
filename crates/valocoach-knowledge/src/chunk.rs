// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text chunking and batching for the embedding path.

/// Split text into chunks of at most `max_chars` characters.
///
/// Splits greedily on whitespace; a single token longer than `max_chars`
/// is hard-split at character boundaries. Never returns empty chunks.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    assert!(max_chars > 0, "max_chars must be positive");

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_chars) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };
        if needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Group items into fixed-size batches; the final batch may be shorter.
pub fn batch<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    assert!(size > 0, "batch size must be positive");
    items.chunks(size).map(|c| c.to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_a_single_chunk() {
        let chunks = chunk_text("a short coaching note", 512);
        assert_eq!(chunks, vec!["a short coaching note"]);
    }

    #[test]
    fn empty_text_yields_no_chunks() {
        assert!(chunk_text("", 512).is_empty());
        assert!(chunk_text("   \n\t ", 512).is_empty());
    }

    #[test]
    fn chunks_never_exceed_max_chars() {
        let text = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do \
                    eiusmod tempor incididunt ut labore et dolore magna aliqua"
            .repeat(20);
        for max in [8, 17, 64, 512] {
            for chunk in chunk_text(&text, max) {
                assert!(
                    chunk.chars().count() <= max,
                    "chunk of {} chars exceeds max {max}",
                    chunk.chars().count()
                );
                assert!(!chunk.is_empty());
            }
        }
    }

    #[test]
    fn splitting_preserves_all_words() {
        let text = "one two three four five six seven eight nine ten";
        let chunks = chunk_text(text, 12);
        let rejoined = chunks.join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn oversized_token_is_hard_split() {
        let token = "x".repeat(25);
        let chunks = chunk_text(&token, 10);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 10);
        assert_eq!(chunks[2].len(), 5);
    }

    #[test]
    fn multibyte_text_splits_on_char_boundaries() {
        let text = "データに基づいた客観的な分析を心がけてください".repeat(4);
        for chunk in chunk_text(&text, 10) {
            assert!(chunk.chars().count() <= 10);
        }
    }

    #[test]
    fn batch_groups_with_short_tail() {
        let items: Vec<i32> = (0..7).collect();
        let batches = batch(&items, 3);
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0], vec![0, 1, 2]);
        assert_eq!(batches[2], vec![6]);
    }

    #[test]
    fn batch_of_empty_slice_is_empty() {
        let batches = batch::<i32>(&[], 100);
        assert!(batches.is_empty());
    }
}
