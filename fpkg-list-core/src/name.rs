//! Display-name derivation for game page URLs.
//!
//! The site encodes each game title as a hyphenated slug in the page URL,
//! e.g. `https://www.superpsx.com/bloodborne-ps4-fpkg/`. The slug is the
//! only name source available from the sitemap, so the readable name is
//! rebuilt from it: strip the platform suffix, title-case the words, drop
//! leftover packaging tokens, then fix up acronyms and roman numerals with
//! a correction table.

/// Suffix appended to every game slug on the site.
const PLATFORM_SUFFIX: &str = "-ps4-fpkg";

/// Packaging tokens removed from names after title-casing. Matched as whole
/// words in the form title-casing produces.
const PACKAGING_TOKENS: &[&str] = &["Ps4", "Fpkg", "Pkg"];

/// Whole-word fixups applied to title-cased names, in order. The left side
/// is the form a slug token takes after title-casing.
const CORRECTIONS: &[(&str, &str)] = &[
    ("P T", "P.T."),
    ("Dmc", "DMC"),
    ("Nba", "NBA"),
    ("Nfl", "NFL"),
    ("Nhl", "NHL"),
    ("Ufc", "UFC"),
    ("Vr", "VR"),
    ("Hd", "HD"),
    ("Dx", "DX"),
    ("Xl", "XL"),
    ("Ii", "II"),
    ("Iii", "III"),
    ("Iv", "IV"),
    ("Vi", "VI"),
    ("Vii", "VII"),
    ("Viii", "VIII"),
    ("Ix", "IX"),
    ("Xv", "XV"),
    ("Gta", "GTA"),
    ("Rpg", "RPG"),
    ("Fps", "FPS"),
    ("Rts", "RTS"),
    ("Mmo", "MMO"),
    ("Dlc", "DLC"),
];

/// Derive a readable game name from a page URL.
///
/// The result may be empty when the slug holds nothing but packaging
/// tokens; callers are expected to reject such entries.
///
/// # Examples
///
/// ```
/// use fpkg_list_core::name::display_name;
///
/// assert_eq!(
///     display_name("https://www.superpsx.com/bloodborne-ps4-fpkg/"),
///     "Bloodborne"
/// );
/// assert_eq!(
///     display_name("https://www.superpsx.com/nba-2k21-ps4-fpkg/"),
///     "NBA 2K21"
/// );
/// ```
pub fn display_name(url: &str) -> String {
    let mut slug = page_slug(url);
    if let Some(stripped) = slug.strip_suffix(PLATFORM_SUFFIX) {
        slug = stripped;
    }

    let mut name = title_case(&slug.replace('-', " "));
    for token in PACKAGING_TOKENS {
        name = replace_words(&name, token, "");
    }
    name = collapse_whitespace(&name);

    for (from, to) in CORRECTIONS {
        name = replace_words(&name, from, to);
    }
    name
}

/// The path segment before the final `/`, or `""` when the URL has fewer
/// than two separators.
fn page_slug(url: &str) -> &str {
    let mut segments = url.rsplit('/');
    segments.next();
    segments.next().unwrap_or("")
}

/// Title-case `text`: a letter at the start or after a non-letter is
/// uppercased, every other letter is lowercased. Digits break words, so
/// `nba 2k21` becomes `Nba 2K21`.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(c);
            prev_is_alpha = false;
        }
    }
    out
}

/// Replace every whole-word occurrence of `needle` in `text` with `to`.
///
/// An occurrence counts as a word when the characters immediately around it
/// are not alphanumerics or underscores. Multi-word needles (`"P T"`) are
/// boundary-checked at their outer edges only.
fn replace_words(text: &str, needle: &str, to: &str) -> String {
    debug_assert!(!needle.is_empty());
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    // Character just before `rest` in the original text.
    let mut prev: Option<char> = None;
    while let Some(pos) = rest.find(needle) {
        let end = pos + needle.len();
        let before = if pos == 0 {
            prev
        } else {
            rest[..pos].chars().next_back()
        };
        let bounded_before = before.is_none_or(|c| !is_word_char(c));
        let bounded_after = rest[end..].chars().next().is_none_or(|c| !is_word_char(c));

        out.push_str(&rest[..pos]);
        if bounded_before && bounded_after {
            out.push_str(to);
        } else {
            out.push_str(&rest[pos..end]);
        }
        prev = rest[..end].chars().next_back();
        rest = &rest[end..];
    }
    out.push_str(rest);
    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Collapse whitespace runs to single spaces and trim both ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_name() {
        assert_eq!(
            display_name("https://www.superpsx.com/bloodborne-ps4-fpkg/"),
            "Bloodborne"
        );
        assert_eq!(
            display_name("https://www.superpsx.com/grand-theft-auto-v-ps4-fpkg/"),
            "Grand Theft Auto V"
        );
    }

    #[test]
    fn test_title_case_after_digits() {
        // Letters following digits start a new word
        assert_eq!(
            display_name("https://www.superpsx.com/nba-2k21-ps4-fpkg/"),
            "NBA 2K21"
        );
        assert_eq!(
            display_name("https://www.superpsx.com/crysis-3d-remaster-ps4-fpkg/"),
            "Crysis 3D Remaster"
        );
    }

    #[test]
    fn test_roman_numeral_corrections() {
        assert_eq!(
            display_name("https://www.superpsx.com/the-last-of-us-part-ii-ps4-fpkg/"),
            "The Last Of Us Part II"
        );
        assert_eq!(
            display_name("https://www.superpsx.com/final-fantasy-vii-remake-ps4-fpkg/"),
            "Final Fantasy VII Remake"
        );
    }

    #[test]
    fn test_corrections_are_whole_word() {
        // "Wii" contains "Ii" but must not become "WII"
        assert_eq!(
            display_name("https://www.superpsx.com/wii-party-ps4-fpkg/"),
            "Wii Party"
        );
        // "Vroom" contains "Vr" at the word start
        assert_eq!(
            display_name("https://www.superpsx.com/vroom-kart-ps4-fpkg/"),
            "Vroom Kart"
        );
        // "Viking" contains "Vi" at the word start
        assert_eq!(
            display_name("https://www.superpsx.com/viking-squad-ps4-fpkg/"),
            "Viking Squad"
        );
    }

    #[test]
    fn test_p_t_correction() {
        assert_eq!(display_name("https://www.superpsx.com/p-t-ps4-fpkg/"), "P.T.");
    }

    #[test]
    fn test_acronym_corrections() {
        assert_eq!(
            display_name("https://www.superpsx.com/dmc-devil-may-cry-ps4-fpkg/"),
            "DMC Devil May Cry"
        );
        assert_eq!(
            display_name("https://www.superpsx.com/gta-vice-city-ps4-fpkg/"),
            "GTA Vice City"
        );
    }

    #[test]
    fn test_packaging_tokens_removed_mid_name() {
        // Suffix only strips at the end; leftover tokens go word by word
        assert_eq!(
            display_name("https://www.superpsx.com/horizon-zero-dawn-ps4-fpkg-update-v1-52/"),
            "Horizon Zero Dawn Update V1 52"
        );
    }

    #[test]
    fn test_slug_is_segment_before_final_slash() {
        assert_eq!(
            display_name("https://www.superpsx.com/games/bloodborne-ps4-fpkg/"),
            "Bloodborne"
        );
    }

    #[test]
    fn test_empty_after_stripping() {
        assert_eq!(display_name("https://www.superpsx.com/ps4-fpkg/"), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("nba 2k21"), "Nba 2K21");
        assert_eq!(title_case("the last of us"), "The Last Of Us");
        assert_eq!(title_case("MIXED case"), "Mixed Case");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_replace_words() {
        assert_eq!(replace_words("Ps4 Game Ps4", "Ps4", ""), " Game ");
        assert_eq!(replace_words("abab", "ab", "X"), "abab");
        assert_eq!(replace_words("Ii And Wii", "Ii", "II"), "II And Wii");
        assert_eq!(replace_words("P T Demo", "P T", "P.T."), "P.T. Demo");
        assert_eq!(replace_words("UP TOWN", "P T", "P.T."), "UP TOWN");
    }
}
