//! Static mora-spelling tables and glyph constants.
//!
//! Two read-only views, both established once per process and shared by
//! reference: the spelling → phoneme-pair table (the full Open JTalk mora
//! inventory, historically rare forms included), and the substitution table
//! mapping spellings the VOICEVOX schema cannot represent onto phonemically
//! identical supported ones. A miss on a spelling the segmenter produced is a
//! contract violation, not a runtime error.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::phoneme::{ConsonantSymbol, VowelSymbol};

/// Pause glyph for a plain clause boundary.
pub const PAUSE_COMMA: &str = "、";
/// Pause glyph for a question-rise clause boundary.
pub const PAUSE_QUESTION: &str = "？";
/// Prolonged sound mark: repeat the previous mora's vowel.
pub const PROLONGED_SOUND_MARK: &str = "ー";
/// Devoicing diacritic, suffixed to a mora spelling (U+2019).
pub const DEVOICING_MARK: char = '’';

use ConsonantSymbol as C;
use VowelSymbol as V;

/// Mora spelling → (consonant, vowel), the Open JTalk inventory.
#[rustfmt::skip]
pub(crate) const MORA_SPELLINGS: &[(&str, Option<ConsonantSymbol>, VowelSymbol)] = &[
    ("ヴョ", Some(C::By), V::O),
    ("ヴュ", Some(C::By), V::U),
    ("ヴャ", Some(C::By), V::A),
    ("ヴォ", Some(C::V), V::O),
    ("ヴェ", Some(C::V), V::E),
    ("ヴィ", Some(C::V), V::I),
    ("ヴァ", Some(C::V), V::A),
    ("ヴ", Some(C::V), V::U),
    ("ン", None, V::N),
    ("ヲ", None, V::O),
    ("ヱ", None, V::E),
    ("ヰ", None, V::I),
    ("ワ", Some(C::W), V::A),
    ("ヮ", Some(C::W), V::A),
    ("ロ", Some(C::R), V::O),
    ("レ", Some(C::R), V::E),
    ("ル", Some(C::R), V::U),
    ("リョ", Some(C::Ry), V::O),
    ("リュ", Some(C::Ry), V::U),
    ("リャ", Some(C::Ry), V::A),
    ("リェ", Some(C::Ry), V::E),
    ("リ", Some(C::R), V::I),
    ("ラ", Some(C::R), V::A),
    ("ヨ", Some(C::Y), V::O),
    ("ョ", Some(C::Y), V::O),
    ("ユ", Some(C::Y), V::U),
    ("ュ", Some(C::Y), V::U),
    ("ヤ", Some(C::Y), V::A),
    ("ャ", Some(C::Y), V::A),
    ("モ", Some(C::M), V::O),
    ("メ", Some(C::M), V::E),
    ("ム", Some(C::M), V::U),
    ("ミョ", Some(C::My), V::O),
    ("ミュ", Some(C::My), V::U),
    ("ミャ", Some(C::My), V::A),
    ("ミェ", Some(C::My), V::E),
    ("ミ", Some(C::M), V::I),
    ("マ", Some(C::M), V::A),
    ("ポ", Some(C::P), V::O),
    ("ボ", Some(C::B), V::O),
    ("ホ", Some(C::H), V::O),
    ("ペ", Some(C::P), V::E),
    ("ベ", Some(C::B), V::E),
    ("ヘ", Some(C::H), V::E),
    ("プ", Some(C::P), V::U),
    ("ブ", Some(C::B), V::U),
    ("フォ", Some(C::F), V::O),
    ("フェ", Some(C::F), V::E),
    ("フィ", Some(C::F), V::I),
    ("ファ", Some(C::F), V::A),
    ("フ", Some(C::F), V::U),
    ("ピョ", Some(C::Py), V::O),
    ("ピュ", Some(C::Py), V::U),
    ("ピャ", Some(C::Py), V::A),
    ("ピェ", Some(C::Py), V::E),
    ("ピ", Some(C::P), V::I),
    ("ビョ", Some(C::By), V::O),
    ("ビュ", Some(C::By), V::U),
    ("ビャ", Some(C::By), V::A),
    ("ビェ", Some(C::By), V::E),
    ("ビ", Some(C::B), V::I),
    ("ヒョ", Some(C::Hy), V::O),
    ("ヒュ", Some(C::Hy), V::U),
    ("ヒャ", Some(C::Hy), V::A),
    ("ヒェ", Some(C::Hy), V::E),
    ("ヒ", Some(C::H), V::I),
    ("パ", Some(C::P), V::A),
    ("バ", Some(C::B), V::A),
    ("ハ", Some(C::H), V::A),
    ("ノ", Some(C::N), V::O),
    ("ネ", Some(C::N), V::E),
    ("ヌ", Some(C::N), V::U),
    ("ニョ", Some(C::Ny), V::O),
    ("ニュ", Some(C::Ny), V::U),
    ("ニャ", Some(C::Ny), V::A),
    ("ニェ", Some(C::Ny), V::E),
    ("ニ", Some(C::N), V::I),
    ("ナ", Some(C::N), V::A),
    ("ドゥ", Some(C::D), V::U),
    ("ド", Some(C::D), V::O),
    ("トゥ", Some(C::T), V::U),
    ("ト", Some(C::T), V::O),
    ("デョ", Some(C::Dy), V::O),
    ("デュ", Some(C::Dy), V::U),
    ("デャ", Some(C::Dy), V::A),
    ("ディ", Some(C::D), V::I),
    ("デ", Some(C::D), V::E),
    ("テョ", Some(C::Ty), V::O),
    ("テュ", Some(C::Ty), V::U),
    ("テャ", Some(C::Ty), V::A),
    ("ティ", Some(C::T), V::I),
    ("テ", Some(C::T), V::E),
    ("ヅ", Some(C::Z), V::U),
    ("ツォ", Some(C::Ts), V::O),
    ("ツェ", Some(C::Ts), V::E),
    ("ツィ", Some(C::Ts), V::I),
    ("ツァ", Some(C::Ts), V::A),
    ("ツ", Some(C::Ts), V::U),
    ("ッ", None, V::Cl),
    ("ヂ", Some(C::J), V::I),
    ("チョ", Some(C::Ch), V::O),
    ("チュ", Some(C::Ch), V::U),
    ("チャ", Some(C::Ch), V::A),
    ("チェ", Some(C::Ch), V::E),
    ("チ", Some(C::Ch), V::I),
    ("ダ", Some(C::D), V::A),
    ("タ", Some(C::T), V::A),
    ("ゾ", Some(C::Z), V::O),
    ("ソ", Some(C::S), V::O),
    ("ゼ", Some(C::Z), V::E),
    ("セ", Some(C::S), V::E),
    ("ズィ", Some(C::Z), V::I),
    ("ズ", Some(C::Z), V::U),
    ("スィ", Some(C::S), V::I),
    ("ス", Some(C::S), V::U),
    ("ジョ", Some(C::J), V::O),
    ("ジュ", Some(C::J), V::U),
    ("ジャ", Some(C::J), V::A),
    ("ジェ", Some(C::J), V::E),
    ("ジ", Some(C::J), V::I),
    ("ショ", Some(C::Sh), V::O),
    ("シュ", Some(C::Sh), V::U),
    ("シャ", Some(C::Sh), V::A),
    ("シェ", Some(C::Sh), V::E),
    ("シ", Some(C::Sh), V::I),
    ("ザ", Some(C::Z), V::A),
    ("サ", Some(C::S), V::A),
    ("ゴ", Some(C::G), V::O),
    ("コ", Some(C::K), V::O),
    ("ゲ", Some(C::G), V::E),
    ("ケ", Some(C::K), V::E),
    ("ヶ", Some(C::K), V::E),
    ("グヮ", Some(C::Gw), V::A),
    ("グ", Some(C::G), V::U),
    ("クヮ", Some(C::Kw), V::A),
    ("ク", Some(C::K), V::U),
    ("ギョ", Some(C::Gy), V::O),
    ("ギュ", Some(C::Gy), V::U),
    ("ギャ", Some(C::Gy), V::A),
    ("ギェ", Some(C::Gy), V::E),
    ("ギ", Some(C::G), V::I),
    ("キョ", Some(C::Ky), V::O),
    ("キュ", Some(C::Ky), V::U),
    ("キャ", Some(C::Ky), V::A),
    ("キェ", Some(C::Ky), V::E),
    ("キ", Some(C::K), V::I),
    ("ガ", Some(C::G), V::A),
    ("カ", Some(C::K), V::A),
    ("オ", None, V::O),
    ("ォ", None, V::O),
    ("エ", None, V::E),
    ("ェ", None, V::E),
    ("ウォ", Some(C::W), V::O),
    ("ウェ", Some(C::W), V::E),
    ("ウィ", Some(C::W), V::I),
    ("ウ", None, V::U),
    ("ゥ", None, V::U),
    ("イェ", Some(C::Y), V::E),
    ("イ", None, V::I),
    ("ィ", None, V::I),
    ("ア", None, V::A),
    ("ァ", None, V::A),
];

/// Spellings VOICEVOX cannot represent → phonemically identical canonical
/// spellings. Applied as an exact whole-spelling substitution, last step of
/// mora projection.
#[rustfmt::skip]
pub(crate) const SPELLING_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("ヲ", "オ"),
    ("ヱ", "エ"),
    ("ヰ", "イ"),
    ("ヮ", "ワ"),
    ("ョ", "ヨ"),
    ("ュ", "ユ"),
    ("ヅ", "ズ"),
    ("ヴョ", "ビョ"),
    ("ヴュ", "ビュ"),
    ("ヴャ", "ビャ"),
    ("ヂョ", "ジョ"),
    ("ヂュ", "ジュ"),
    ("ヂャ", "ジャ"),
    ("ヂェ", "ジェ"),
    ("ヂ", "ジ"),
    ("グァ", "グヮ"),
    ("クァ", "クヮ"),
    ("ヶ", "ケ"),
    ("ャ", "ヤ"),
    ("ォ", "オ"),
    ("ェ", "エ"),
    ("ゥ", "ウ"),
    ("ィ", "イ"),
    ("ァ", "ア"),
];

/// Look up the phoneme pair for a mora spelling.
pub(crate) fn mora_phonemes(spelling: &str) -> Option<(Option<ConsonantSymbol>, VowelSymbol)> {
    static MAP: OnceLock<HashMap<&'static str, (Option<ConsonantSymbol>, VowelSymbol)>> =
        OnceLock::new();
    MAP.get_or_init(|| {
        MORA_SPELLINGS
            .iter()
            .map(|&(spelling, consonant, vowel)| (spelling, (consonant, vowel)))
            .collect()
    })
    .get(spelling)
    .copied()
}

/// Replace a VOICEVOX-unsupported spelling with its canonical equivalent;
/// anything else passes through unchanged.
pub(crate) fn canonical_spelling(spelling: &str) -> &str {
    SPELLING_SUBSTITUTIONS
        .iter()
        .find(|&&(from, _)| from == spelling)
        .map(|&(_, to)| to)
        .unwrap_or(spelling)
}
