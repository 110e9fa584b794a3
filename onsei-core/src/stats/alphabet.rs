//! Fixed key alphabets of the pattern families
//!
//! Every count table is keyed by an explicit enumeration over these
//! alphabets. The enumeration order is also the order in which keys are
//! registered, and therefore the tie-break order of sorted output.

/// Vowels
pub const VOWELS: [&str; 5] = ["a", "e", "i", "o", "u"];

/// Mora markers: geminate (ッ) and moraic nasal (ン)
pub const MORA_MARKERS: [&str; 2] = ["L", "N"];

/// Vowels followed by mora markers; keys of the vowel table
pub const NUCLEI: [&str; 7] = ["a", "e", "i", "o", "u", "L", "N"];

/// Consonant cluster symbols
pub const CONSONANTS: [&str; 26] = [
    "k", "ky", "g", "gy", "s", "sy", "z", "zy", "t", "ty", "ts", "n", "ny", "h", "hy", "f", "b",
    "by", "p", "py", "v", "m", "my", "y", "r", "w",
];

/// Optional marker slot of a consonant combination
pub const MARKER_SLOTS: [&str; 3] = ["", "L", "N"];

/// Number of optional cluster slots (none + every consonant)
pub const CLUSTER_SLOTS: usize = CONSONANTS.len() + 1;

/// Number of vowel-pair keys
pub const VOWEL_PAIR_KEY_COUNT: usize = NUCLEI.len() * NUCLEI.len();

/// Number of consonant-combination keys
pub const COMBINATION_KEY_COUNT: usize =
    VOWELS.len() * MARKER_SLOTS.len() * CLUSTER_SLOTS * VOWELS.len();

/// Vowel-pair keys in enumeration order
pub fn vowel_pair_keys() -> impl Iterator<Item = String> {
    NUCLEI
        .iter()
        .flat_map(|first| NUCLEI.iter().map(move |second| format!("{first}{second}")))
}

/// Cluster slot text; slot 0 is the empty cluster
#[inline]
pub fn cluster_slot(slot: usize) -> &'static str {
    if slot == 0 {
        ""
    } else {
        CONSONANTS[slot - 1]
    }
}

/// Dense index of a consonant-combination key
#[inline]
pub fn combination_index(first: usize, marker: usize, cluster: usize, second: usize) -> usize {
    ((first * MARKER_SLOTS.len() + marker) * CLUSTER_SLOTS + cluster) * VOWELS.len() + second
}

/// Key text for a dense combination index
pub fn combination_key(index: usize) -> String {
    let second = index % VOWELS.len();
    let rest = index / VOWELS.len();
    let cluster = rest % CLUSTER_SLOTS;
    let rest = rest / CLUSTER_SLOTS;
    let marker = rest % MARKER_SLOTS.len();
    let first = rest / MARKER_SLOTS.len();

    format!(
        "{}{}{}{}",
        VOWELS[first],
        MARKER_SLOTS[marker],
        cluster_slot(cluster),
        VOWELS[second]
    )
}

/// Consonant-combination keys in enumeration order
pub fn combination_keys() -> impl Iterator<Item = String> {
    (0..COMBINATION_KEY_COUNT).map(combination_key)
}

/// Index of an ASCII vowel byte in [`VOWELS`]
#[inline]
pub fn vowel_index(byte: u8) -> Option<usize> {
    match byte {
        b'a' => Some(0),
        b'e' => Some(1),
        b'i' => Some(2),
        b'o' => Some(3),
        b'u' => Some(4),
        _ => None,
    }
}

/// Index of a mora marker byte in [`MARKER_SLOTS`]
#[inline]
pub fn marker_slot(byte: u8) -> Option<usize> {
    match byte {
        b'L' => Some(1),
        b'N' => Some(2),
        _ => None,
    }
}

/// Whether `byte` is a one-letter consonant symbol
///
/// Every two-letter symbol ends in `y` or `s`, both of which are one-letter
/// symbols too, so this also tells whether some onset ends at this byte.
#[inline]
pub fn is_onset_letter(byte: u8) -> bool {
    matches!(
        byte,
        b'k' | b'g'
            | b's'
            | b'z'
            | b't'
            | b'n'
            | b'h'
            | b'f'
            | b'b'
            | b'p'
            | b'v'
            | b'm'
            | b'y'
            | b'r'
            | b'w'
    )
}

/// Cluster slots of every consonant symbol starting at `pos`, with their lengths
///
/// At most one one-letter and one two-letter symbol can start at a position.
pub fn clusters_at(code: &[u8], pos: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
    CONSONANTS
        .iter()
        .enumerate()
        .filter(move |(_, symbol)| code[pos.min(code.len())..].starts_with(symbol.as_bytes()))
        .map(|(i, symbol)| (i + 1, symbol.len()))
}
