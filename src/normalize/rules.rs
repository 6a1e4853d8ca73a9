/*!
 * Rule-based cue text normalizer.
 *
 * Given one cue, the normalizer either signals deletion or produces the
 * normalized text. Transformations run in a fixed, explicitly ordered
 * sequence; order is a correctness requirement because later rules assume
 * earlier normalization (punctuation unification happens before the
 * quote-to-corner-bracket conversion, for example).
 *
 * The punctuation table is data-driven: an ordered list of literal and
 * pattern rewrites evaluated in sequence, applied only to CJK-bearing text.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dictionary::{TermCategory, TermDictionary};
use crate::subtitle_processor::SubtitleEntry;

/// Decision produced by the normalizer for one cue
#[derive(Debug, Clone, PartialEq)]
pub enum CueOutcome {
    /// Drop the cue from the track
    Delete,
    /// Keep the cue with the given text; `typo` carries the before/after
    /// pair when the dictionary delegation changed the text
    Keep {
        text: String,
        typo: Option<(String, String)>,
    },
}

/// One entry of the ordered punctuation table
enum TableRule {
    /// Literal substring replacement
    Plain(&'static str, &'static str),
    /// Regex replacement
    Pattern(&'static str, &'static str),
}

/// Compiled form of the table, built once
enum CompiledRule {
    Plain(&'static str, &'static str),
    Pattern(Regex, &'static str),
}

/// Punctuation and symbol unification for CJK-bearing text, in application
/// order. Entries earlier in the table feed the ones after them.
static CJK_PUNCTUATION_TABLE: &[TableRule] = &[
    TableRule::Plain("＂", "\""),
    TableRule::Plain("➚", ""),
    TableRule::Plain("..", "…"),
    TableRule::Plain("．．．", "…"),
    TableRule::Plain("﹒﹒﹒", "…"),
    TableRule::Plain("。。。", "…"),
    TableRule::Plain(" …", "…"),
    TableRule::Plain("….", "…"),
    TableRule::Plain("!?", "⁉︎ "),
    TableRule::Plain("?!", "⁉︎ "),
    TableRule::Plain("!", "！"),
    TableRule::Plain("?", "？"),
    TableRule::Plain(" ！", "！"),
    TableRule::Plain(" ？", "？"),
    TableRule::Plain("！？", "⁉︎ "),
    TableRule::Plain("？!", "⁉︎ "),
    TableRule::Plain("！", "！ "),
    TableRule::Plain("？", "？ "),
    TableRule::Plain("？ ？", "？？"),
    TableRule::Plain("！ ！", "！！"),
    TableRule::Plain("，", " "),
    TableRule::Plain("。", " "),
    TableRule::Plain("、 ", "、"),
    TableRule::Plain(" 、", "、"),
    TableRule::Plain(",\n\r", ""),
    TableRule::Plain(":", "："),
    TableRule::Plain("： ", "："),
    TableRule::Plain("：\n", "："),
    TableRule::Plain("~", "～"),
    TableRule::Plain("|", "｜"),
    TableRule::Plain(" |", "｜"),
    TableRule::Plain("| ", "｜"),
    TableRule::Pattern(r"([\u4E00-\u9FFF]+)\.", "$1 "),
    TableRule::Plain("(", "（"),
    TableRule::Plain("（-=", "（"),
    TableRule::Plain("（-= ", "（"),
    TableRule::Plain("-=", "（"),
    TableRule::Plain("-= ", "（"),
    TableRule::Plain(" （", "（"),
    TableRule::Plain("（ ", "（"),
    TableRule::Plain("（\n\r", "（"),
    TableRule::Plain(")", "）"),
    TableRule::Plain("=-）", "）"),
    TableRule::Plain(" =-）", "）"),
    TableRule::Plain("=-", "）"),
    TableRule::Plain(" =-", "）"),
    TableRule::Plain(" ）", "）"),
    TableRule::Plain("\n\r)", "）"),
    TableRule::Plain("\\h", ""),
    TableRule::Plain("•", "・"),
    TableRule::Plain("‧", "・"),
    TableRule::Plain("·", "・"),
    TableRule::Plain("．", "・"),
    TableRule::Plain("〝", "「"),
    TableRule::Plain("〞", "」"),
    TableRule::Plain("『", "「"),
    TableRule::Plain("』", "」"),
    TableRule::Plain("「 ", "「"),
    TableRule::Plain(" 」", "」"),
    TableRule::Plain("注：", "註："),
    TableRule::Plain("（註：", "\n（註："),
    TableRule::Plain("-（", "（"),
    TableRule::Plain("->", " → "),
    TableRule::Plain("<-", " ← "),
    TableRule::Pattern(r"^[<＜]", "〈"),
    TableRule::Pattern(r"[>＞]$", "〉"),
    TableRule::Plain("）\n-", "）\n"),
    TableRule::Plain("- ", "-"),
    TableRule::Plain("　", " "),
];

static COMPILED_TABLE: Lazy<Vec<CompiledRule>> = Lazy::new(|| {
    CJK_PUNCTUATION_TABLE.iter()
        .map(|rule| match rule {
            TableRule::Plain(from, to) => CompiledRule::Plain(from, to),
            TableRule::Pattern(pattern, to) => CompiledRule::Pattern(
                Regex::new(pattern).expect("Invalid punctuation table pattern"),
                to,
            ),
        })
        .collect()
});

/// Fixed idioms rewritten to a canonical parenthesized form by exact match
static FIXED_IDIOMS: &[(&str, &str)] = &[
    ("下集預告", "（下集預告）"),
    ("=下集預告=", "（下集預告）"),
    ("下 集 預 告", "（下集預告）"),
    ("前情提要", "（前情提要）"),
    ("前 情 提 要", "（前情提要）"),
    ("本集回顧", "（本集回顧）"),
    ("本 集 回 顧", "（本集回顧）"),
];

/// Filler interjection dropped outright
const FILLER_TOKEN: &str = "我去";

/// Translator-credit phrase; cues carrying it are dropped
const CREDIT_PHRASE: &str = "字幕翻譯";

static POS_FAD_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\\.*?(pos|fad)\([0-9.]+,[0-9.]+\).*?\}").expect("Invalid pos/fad tag regex")
});

static TOP_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{.*?\\an8.*?\}").expect("Invalid top tag regex")
});

static OVERRIDE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\\.+?\}").expect("Invalid override tag regex")
});

static TAG_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\{.+?\})+").expect("Invalid tag run regex")
});

static CJK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\u4E00-\u9FFF]").expect("Invalid CJK regex")
});

static COMMA_BEFORE_CJK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r",([\u4E00-\u9FFF]+)").expect("Invalid comma regex")
});

static COMMA_AFTER_CJK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([\u4E00-\u9FFF]+),").expect("Invalid comma regex")
});

static CJK_BEFORE_BRACKET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([\u4E00-\u9FFF]+)\[").expect("Invalid bracket regex")
});

static BRACKET_BEFORE_CJK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\]([\u4E00-\u9FFF]+)").expect("Invalid bracket regex")
});

static CLOCK_MERIDIEM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([AP]M) ?([0-9]{2})：([0-9]{2})").expect("Invalid clock regex")
});

static CLOCK_HMS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)：([0-9]+)：([0-9]+)").expect("Invalid clock regex")
});

static CLOCK_HM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)：([0-9]+)").expect("Invalid clock regex")
});

static SPLIT_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^（?[\u4E00-\u9FFF]\n").expect("Invalid split line regex")
});

static ELLIPSIS_BETWEEN_CJK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([\u4E00-\u9FFF]+)…([\u4E00-\u9FFF]+)").expect("Invalid ellipsis regex")
});

static CJK_TRAILING_PERIOD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([\u4E00-\u9FFF])\.").expect("Invalid period regex")
});

static DOUBLE_QUOTED_CJK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""(.*?[\u4E00-\u9FFF]+.*?)""#).expect("Invalid quoted span regex")
});

static SINGLE_QUOTED_CJK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"'(.*?[\u4E00-\u9FFF]+.*?)'").expect("Invalid quoted span regex")
});

static STRAY_LEADING_QUOTE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^["'](.*?[\u4E00-\u9FFF]+)"#).expect("Invalid stray quote regex")
});

static STRAY_TRAILING_QUOTE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([\u4E00-\u9FFF]+)["']$"#).expect("Invalid stray quote regex")
});

static NUMBERED_ITEM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)\.([\u4E00-\u9FFF]+)").expect("Invalid numbered item regex")
});

static EPISODE_HEADING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"（第(.*?)[集話回](.*?)）(.*)").expect("Invalid episode heading regex")
});

static EPISODE_ONLY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^第(.*?)[集話回]$").expect("Invalid episode heading regex")
});

static DIALOGUE_SPAN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\t| )-[ \u4E00-\u9FFF]+").expect("Invalid dialogue span regex")
});

static LEADING_DIALOGUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([\u4E00-\u9FFF]+)\n-").expect("Invalid leading dialogue regex")
});

/// Normalize one cue.
///
/// The deletion policy is evaluated first and short-circuits; surviving text
/// runs through the ordered transformation rules and the two dictionary
/// delegations (CONTEXT, then TYPO). A `(before, after)` pair is reported
/// when the delegations changed the text.
pub fn normalize_cue(entry: &SubtitleEntry, dictionary: &dyn TermDictionary) -> CueOutcome {
    let text = entry.text.trim();

    if text.is_empty() || text == "\\n" || text == "\\N" {
        return CueOutcome::Delete;
    }

    if entry.start_time_ms == 0 && entry.end_time_ms == 0 {
        return CueOutcome::Delete;
    }

    if text.contains(CREDIT_PHRASE) {
        return CueOutcome::Delete;
    }

    if text == FILLER_TOKEN {
        return CueOutcome::Delete;
    }

    let transformed = apply_transformations(text, dictionary);

    let mut corrected = dictionary.translate(&transformed, TermCategory::Context);
    corrected = dictionary.translate(&corrected, TermCategory::Typo);

    let typo = if corrected != transformed {
        Some((transformed, corrected.clone()))
    } else {
        None
    };

    CueOutcome::Keep { text: corrected, typo }
}

/// Apply the ordered transformation rules to cue text.
///
/// The dictionary is consulted only for the NUMBER category (episode
/// headings); the CONTEXT/TYPO delegations happen in `normalize_cue`.
/// Running this a second time on its own output yields no further change.
pub fn apply_transformations(text: &str, dictionary: &dyn TermDictionary) -> String {
    let mut text = text.to_string();

    // 1. Positional/fade overrides become a parenthesized annotation
    if POS_FAD_TAG_REGEX.is_match(&text) {
        text = format!("（{}）", TAG_RUN_REGEX.replace_all(&text, ""));
    }

    // 2. The top-of-screen tag survives; every other override tag is stripped
    if TOP_TAG_REGEX.is_match(&text) {
        text = format!("{{\\an8}}{}", TAG_RUN_REGEX.replace_all(&text, ""));
    } else if OVERRIDE_TAG_REGEX.is_match(&text) {
        text = TAG_RUN_REGEX.replace_all(&text, "").into_owned();
    }

    // 3. Comma and square-bracket spacing around CJK runs
    text = COMMA_BEFORE_CJK_REGEX.replace_all(&text, " $1").into_owned();
    text = COMMA_AFTER_CJK_REGEX.replace_all(&text, "$1").into_owned();
    text = CJK_BEFORE_BRACKET_REGEX.replace_all(&text, "$1 [").into_owned();
    text = BRACKET_BEFORE_CJK_REGEX.replace_all(&text, "] $1").into_owned();

    // 4. Punctuation and symbol unification inside CJK-bearing text
    if CJK_REGEX.is_match(&text) {
        for rule in COMPILED_TABLE.iter() {
            match rule {
                CompiledRule::Plain(from, to) => {
                    if text.contains(from) {
                        text = text.replace(from, to);
                    }
                }
                CompiledRule::Pattern(regex, to) => {
                    text = regex.replace_all(&text, *to).into_owned();
                }
            }
        }
    }

    // 5. Full/half-width quote unification regardless of script
    text = text.replace('“', "\"");
    text = text.replace('”', "\"");
    text = text.replace('’', "'");
    text = text.replace('‘', "'");

    // 6. Drop empty lines
    text = text.split('\n')
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    // 7. Clock notation: meridiem moves after the time, colons go half-width
    text = CLOCK_MERIDIEM_REGEX.replace_all(&text, "$2:$3 $1 ").into_owned();
    text = CLOCK_HMS_REGEX.replace_all(&text, "$1:$2:$3").into_owned();
    text = CLOCK_HM_REGEX.replace_all(&text, "$1:$2").into_owned();

    // 8. Spuriously split lines: a run of single-CJK-character lines is a
    // symptom of per-character line breaking, collapsed unless the text
    // carries dialogue dashes
    if !text.contains('-') && SPLIT_LINE_REGEX.find_iter(&text).count() > 2 {
        text = text.replace('\n', "");
    }

    // 9. Ellipsis spacing between CJK runs; CJK-trailing ASCII period
    text = ELLIPSIS_BETWEEN_CJK_REGEX.replace_all(&text, "$1… $2").into_owned();
    text = CJK_TRAILING_PERIOD_REGEX.replace_all(&text, "$1 ").into_owned();

    // 10. Quoted CJK spans become corner brackets, stray quotes are stripped
    text = DOUBLE_QUOTED_CJK_REGEX.replace_all(&text, "「$1」").into_owned();
    text = SINGLE_QUOTED_CJK_REGEX.replace_all(&text, "「$1」").into_owned();
    text = text.replace(" 」", "」");
    text = STRAY_LEADING_QUOTE_REGEX.replace_all(&text, "$1").into_owned();
    text = STRAY_TRAILING_QUOTE_REGEX.replace_all(&text, "$1").into_owned();

    // 11. Numbered-item spacing
    text = NUMBERED_ITEM_REGEX.replace_all(&text, "$1. $2").into_owned();

    // 12. Episode headings, with the numeral delegated to the dictionary
    if let Some(caps) = EPISODE_HEADING_REGEX.captures(&text) {
        let number = dictionary.translate(&caps[1], TermCategory::Number);
        text = format!("（第{}集{}）{}", number.trim(), &caps[2], &caps[3]);
    }
    if let Some(caps) = EPISODE_ONLY_REGEX.captures(&text) {
        let number = dictionary.translate(&caps[1], TermCategory::Number);
        text = format!("（第{}集）", number.trim());
    }

    // 13. Fixed idioms by exact match
    for (idiom, canonical) in FIXED_IDIOMS {
        if text == *idiom {
            text = (*canonical).to_string();
        }
    }

    // 14. Dialogue dashes: an inline dash-led CJK span moves to its own line,
    // and a leading plain line followed by a dashed one gains its own dash
    if DIALOGUE_SPAN_REGEX.is_match(&text) {
        text = text.replace(" -", "\n-");
        text = text.replace("\t-", "\n-");
        text = text.split('\n')
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect::<Vec<_>>()
            .join("\n");
    }
    text = LEADING_DIALOGUE_REGEX.replace_all(&text, "-$1\n-").into_owned();

    // 15. Redundant break/space collapsing
    text = text.replace("\n\n", "\n");
    text = text.replace("  ", " ");
    text = text.replace(" 　　", " ");

    text
}
