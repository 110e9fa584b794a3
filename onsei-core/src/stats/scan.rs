//! Linear scans over a phoneme code string
//!
//! Each function counts the same non-overlapping, leftmost matches as the
//! literal patterns in [`super::pattern`], without building them. Every key
//! symbol is ASCII, so the scans work on bytes: a multi-byte character that
//! passed through romanization never equals a key byte and behaves like any
//! other non-vowel.

use super::alphabet::{
    clusters_at, combination_index, is_onset_letter, marker_slot, vowel_index,
    COMBINATION_KEY_COUNT,
};

/// Non-overlapping occurrences of `needle` in `haystack`
#[inline]
pub fn count_occurrences(haystack: &str, needle: &str) -> u64 {
    haystack.matches(needle).count() as u64
}

/// Whether `byte` ends the gap between two nuclei
#[inline]
fn breaks_gap(byte: u8) -> bool {
    byte == b' ' || vowel_index(byte).is_some()
}

/// Matches of `first`, a run of non-vowel non-space characters, then `second`
///
/// The run is greedy: when `second` is a mora marker the match extends to its
/// last occurrence inside the run.
pub fn count_vowel_pair(code: &[u8], first: u8, second: u8) -> u64 {
    let second_is_vowel = vowel_index(second).is_some();
    let mut count = 0;
    let mut pos = 0;

    while pos < code.len() {
        if code[pos] != first {
            pos += 1;
            continue;
        }

        let run_start = pos + 1;
        let run_end = code[run_start..]
            .iter()
            .position(|&b| breaks_gap(b))
            .map_or(code.len(), |offset| run_start + offset);

        if second_is_vowel {
            if code.get(run_end) == Some(&second) {
                count += 1;
                pos = run_end + 1;
            } else {
                // Any later start inside the run sees the same terminator
                pos = run_end;
            }
        } else {
            match code[run_start..run_end].iter().rposition(|&b| b == second) {
                Some(offset) => {
                    count += 1;
                    pos = run_start + offset + 1;
                }
                None => pos = run_end,
            }
        }
    }

    count
}

/// Counts of every consonant combination, indexed by
/// [`combination_index`](super::alphabet::combination_index)
///
/// One pass over the code string. At each vowel preceded by an onset letter,
/// every key that occurs there is enumerated (at most a handful), and counted
/// unless its previous match still covers the onset.
pub fn count_consonant_combinations(code: &[u8]) -> Vec<u64> {
    let mut counts = vec![0u64; COMBINATION_KEY_COUNT];
    // Earliest position a new match of each key may start at
    let mut resume = vec![0usize; COMBINATION_KEY_COUNT];

    for q in 1..code.len() {
        let Some(first) = vowel_index(code[q]) else {
            continue;
        };
        let onset = q - 1;
        if !is_onset_letter(code[onset]) {
            continue;
        }

        let mut slots = [(0usize, q + 1); 2];
        let mut slot_count = 1;
        if let Some(marker) = code.get(q + 1).copied().and_then(marker_slot) {
            slots[1] = (marker, q + 2);
            slot_count = 2;
        }

        for &(marker, cluster_start) in &slots[..slot_count] {
            let bare = std::iter::once((0usize, 0usize));
            for (cluster, len) in bare.chain(clusters_at(code, cluster_start)) {
                let Some(second) = code.get(cluster_start + len).copied().and_then(vowel_index)
                else {
                    continue;
                };

                let key = combination_index(first, marker, cluster, second);
                if onset >= resume[key] {
                    counts[key] += 1;
                    resume[key] = cluster_start + len + 1;
                }
            }
        }
    }

    counts
}
