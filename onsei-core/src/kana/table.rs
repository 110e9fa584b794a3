//! Katakana to romanized phoneme code table
//!
//! The table is a fixed, versioned artifact: output compatibility depends on
//! every entry being reproduced exactly, including the `ピヤ` row whose second
//! character is not a combining kana.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Small kana that may combine with the preceding character
pub const COMBINING_KANA: [char; 8] = ['ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ'];

/// Every katakana unit and its code, in table order
pub const KANA_TABLE: &[(&str, &str)] = &[
    ("ア", "a"),
    ("イ", "i"),
    ("ウ", "u"),
    ("エ", "e"),
    ("オ", "o"),
    ("カ", "ka"),
    ("キ", "ki"),
    ("ク", "ku"),
    ("ケ", "ke"),
    ("コ", "ko"),
    ("キャ", "kya"),
    ("キュ", "kyu"),
    ("キェ", "kye"),
    ("キョ", "kyo"),
    ("ガ", "ga"),
    ("ギ", "gi"),
    ("グ", "gu"),
    ("ゲ", "ge"),
    ("ゴ", "go"),
    ("ギャ", "gya"),
    ("ギュ", "gyu"),
    ("ギェ", "gye"),
    ("ギョ", "gyo"),
    ("サ", "sa"),
    ("シ", "si"),
    ("ス", "su"),
    ("セ", "se"),
    ("ソ", "so"),
    ("シャ", "sya"),
    ("シュ", "syu"),
    ("シェ", "sye"),
    ("ショ", "syo"),
    ("ザ", "za"),
    ("ジ", "zi"),
    ("ズ", "zu"),
    ("ゼ", "ze"),
    ("ゾ", "zo"),
    ("ジャ", "zya"),
    ("ジュ", "zyu"),
    ("ジェ", "zye"),
    ("ジョ", "zyo"),
    ("タ", "ta"),
    ("チ", "ti"),
    ("ツ", "tu"),
    ("テ", "te"),
    ("ト", "to"),
    ("チャ", "tya"),
    ("チュ", "tyu"),
    ("チェ", "tye"),
    ("チョ", "tyo"),
    ("ツァ", "tsa"),
    ("ツィ", "tsi"),
    ("ツェ", "tse"),
    ("ツォ", "tso"),
    ("ダ", "da"),
    ("ヂ", "di"),
    ("ヅ", "du"),
    ("デ", "de"),
    ("ド", "do"),
    ("ヂャ", "dya"),
    ("ヂュ", "dyu"),
    ("ヂェ", "dye"),
    ("ヂョ", "dyo"),
    ("ナ", "na"),
    ("ニ", "ni"),
    ("ヌ", "nu"),
    ("ネ", "ne"),
    ("ノ", "no"),
    ("ニャ", "nya"),
    ("ニュ", "nyu"),
    ("ニェ", "nye"),
    ("ニョ", "nyo"),
    ("ハ", "ha"),
    ("ヒ", "hi"),
    ("フ", "hu"),
    ("ヘ", "he"),
    ("ホ", "ho"),
    ("ヒャ", "hya"),
    ("ヒュ", "hyu"),
    ("ヒェ", "hye"),
    ("ヒョ", "hyo"),
    ("ファ", "fa"),
    ("フィ", "fi"),
    ("フェ", "fe"),
    ("フォ", "fo"),
    ("バ", "ba"),
    ("ビ", "bi"),
    ("ブ", "bu"),
    ("ベ", "be"),
    ("ボ", "bo"),
    ("ビャ", "bya"),
    ("ビュ", "byu"),
    ("ビェ", "bye"),
    ("ビョ", "byo"),
    ("ヴァ", "va"),
    ("ヴィ", "vi"),
    ("ヴ", "vu"),
    ("ヴェ", "ve"),
    ("ヴォ", "vo"),
    ("パ", "pa"),
    ("ピ", "pi"),
    ("プ", "pu"),
    ("ペ", "pe"),
    ("ポ", "po"),
    ("ピヤ", "pya"),
    ("ピュ", "pyu"),
    ("ピェ", "pye"),
    ("ピョ", "pyo"),
    ("マ", "ma"),
    ("ミ", "mi"),
    ("ム", "mu"),
    ("メ", "me"),
    ("モ", "mo"),
    ("ミャ", "mya"),
    ("ミュ", "myu"),
    ("ミェ", "mye"),
    ("ミョ", "myo"),
    ("ヤ", "ya"),
    ("ユ", "yu"),
    ("ヨ", "yo"),
    ("ラ", "ra"),
    ("リ", "ri"),
    ("ル", "ru"),
    ("レ", "re"),
    ("ロ", "ro"),
    ("リャ", "rya"),
    ("リュ", "ryu"),
    ("リェ", "rye"),
    ("リョ", "ryo"),
    ("ワ", "wa"),
    ("ヰ", "wi"),
    ("ヱ", "we"),
    ("ヲ", "wo"),
    ("ー", "-"),
    ("ン", "N"),
    ("ッ", "L"),
];

/// Lookup structure over [`KANA_TABLE`]
#[derive(Debug)]
pub struct KanaTable {
    singles: HashMap<char, &'static str>,
    pairs: HashMap<(char, char), &'static str>,
}

impl KanaTable {
    fn build() -> Self {
        let mut singles = HashMap::new();
        let mut pairs = HashMap::new();

        for &(kana, code) in KANA_TABLE {
            let mut chars = kana.chars();
            match (chars.next(), chars.next()) {
                (Some(first), None) => {
                    singles.insert(first, code);
                }
                (Some(first), Some(second)) => {
                    pairs.insert((first, second), code);
                }
                _ => {}
            }
        }

        Self { singles, pairs }
    }

    /// Shared table, built on first use
    pub fn global() -> &'static KanaTable {
        static TABLE: OnceLock<KanaTable> = OnceLock::new();
        TABLE.get_or_init(Self::build)
    }

    /// Code for a single katakana character
    #[inline]
    pub fn single(&self, ch: char) -> Option<&'static str> {
        self.singles.get(&ch).copied()
    }

    /// Code for a katakana character followed by a combining small kana
    #[inline]
    pub fn pair(&self, first: char, second: char) -> Option<&'static str> {
        if !is_combining(second) {
            return None;
        }
        self.pairs.get(&(first, second)).copied()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.singles.len() + self.pairs.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Check if `ch` is a small kana that combines with its predecessor
#[inline]
pub fn is_combining(ch: char) -> bool {
    COMBINING_KANA.contains(&ch)
}
