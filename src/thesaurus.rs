//! Static synonym/antonym lookup.
//!
//! Entries are written one per line:
//!
//! ```text
//! # comment
//! headword: synonym, synonym | antonym, antonym
//! ```
//!
//! The `| antonyms` part is optional.

use crate::errors::ParseError;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

const BUILTIN_ENTRIES: &str = "\
happy: joyful, cheerful, content, delighted, pleased, glad, elated, merry | sad, unhappy, miserable, depressed, gloomy
sad: unhappy, sorrowful, melancholy, gloomy, depressed, downcast, dejected | happy, joyful, cheerful, elated
big: large, huge, enormous, massive, giant, vast, immense, grand | small, tiny, little, miniature
small: tiny, little, miniature, compact, petite, minute, microscopic | big, large, huge, enormous
fast: quick, rapid, swift, speedy, hasty, brisk, fleet | slow, sluggish, leisurely
slow: sluggish, leisurely, unhurried, gradual, lazy, plodding | fast, quick, rapid, swift
good: excellent, great, fine, wonderful, superb, outstanding, pleasant | bad, poor, terrible, awful
bad: terrible, awful, poor, dreadful, horrible, unpleasant, inferior | good, excellent, great, wonderful
beautiful: gorgeous, stunning, lovely, attractive, pretty, elegant, handsome | ugly, unattractive, hideous
ugly: unattractive, hideous, unsightly, grotesque, homely | beautiful, gorgeous, lovely, attractive
smart: intelligent, clever, bright, brilliant, wise, sharp, astute | stupid, dumb, foolish, ignorant
easy: simple, effortless, straightforward, uncomplicated, basic | hard, difficult, challenging, complex
hard: difficult, challenging, tough, demanding, complex, arduous | easy, simple, effortless
hot: warm, heated, burning, scorching, boiling, fiery | cold, cool, freezing, chilly
cold: cool, chilly, freezing, icy, frigid, frosty | hot, warm, heated
new: fresh, modern, recent, novel, latest, current | old, ancient, outdated, vintage
old: ancient, aged, elderly, vintage, antique, mature | new, young, fresh, modern
strong: powerful, mighty, robust, sturdy, tough, muscular | weak, feeble, frail
weak: feeble, frail, fragile, delicate, powerless | strong, powerful, mighty, robust
love: adore, cherish, treasure, worship, idolize, fancy | hate, despise, loathe, detest
hate: despise, loathe, detest, abhor, dislike | love, adore, cherish, like
rich: wealthy, affluent, prosperous, loaded, well-off | poor, broke, destitute, impoverished
poor: destitute, impoverished, needy, broke, penniless | rich, wealthy, affluent, prosperous
begin: start, commence, initiate, launch, open | end, finish, conclude, stop
end: finish, conclude, terminate, complete, close | begin, start, commence, open
bright: brilliant, radiant, luminous, vivid, shining, gleaming | dark, dim, dull, gloomy
dark: dim, shadowy, gloomy, murky, black, unlit | bright, light, luminous, radiant
clean: spotless, tidy, neat, pure, sanitary, pristine | dirty, filthy, messy, grimy
dirty: filthy, grimy, messy, soiled, unclean, muddy | clean, spotless, tidy, pure
";

static BUILTIN: LazyLock<Thesaurus> = LazyLock::new(|| {
    Thesaurus::parse_from_str(BUILTIN_ENTRIES)
        .unwrap_or_else(|e| panic!("BUG: built-in thesaurus failed to parse: {e}"))
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThesaurusEntry {
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Thesaurus {
    entries: HashMap<String, ThesaurusEntry>,
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

impl Thesaurus {
    /// Parse thesaurus text. A later line for the same headword replaces
    /// the earlier one.
    ///
    /// # Errors
    /// `InvalidThesaurusLine` (1-indexed) for a line with no `headword:`.
    pub fn parse_from_str(text: &str) -> Result<Thesaurus, Box<ParseError>> {
        let mut entries = HashMap::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let invalid = || Box::new(ParseError::InvalidThesaurusLine { line_no: idx + 1, line: line.to_string() });

            let (headword, rest) = line.split_once(':').ok_or_else(invalid)?;
            let headword = headword.trim().to_lowercase();
            if headword.is_empty() {
                return Err(invalid());
            }
            let (synonyms, antonyms) = rest.split_once('|').unwrap_or((rest, ""));
            entries.insert(
                headword,
                ThesaurusEntry { synonyms: split_list(synonyms), antonyms: split_list(antonyms) },
            );
        }
        Ok(Thesaurus { entries })
    }

    #[must_use]
    pub fn builtin() -> &'static Thesaurus {
        &BUILTIN
    }

    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<&ThesaurusEntry> {
        self.entries.get(&word.trim().to_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
