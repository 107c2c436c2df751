//! Classification of page entries as games versus tooling posts.
//!
//! The site publishes real game pages next to homebrew, loaders, firmware
//! guides and similar utility posts under the same URL scheme, so matching
//! the URL marker alone is not enough. Entries are knocked out by a fixed
//! vocabulary before they reach the catalog.

/// Terms that mark an entry as a tool, homebrew or other non-game post.
/// Matched as plain substrings of the lowercased name and URL. Multi-word
/// terms carry a space, so they only bite on the name side, where the
/// slug's hyphens have already become spaces.
const EXCLUDED_TERMS: &[&str] = &[
    "homebrew",
    "tool",
    "utility",
    "installer",
    "manager",
    "browser",
    "emulator",
    "exploit",
    "jailbreak",
    "pkg linker",
    "ftp",
    "multiman",
    "webman",
    "hen",
    "cfw",
    "ofw",
    "backup",
    "save data",
    "theme",
    "avatar",
    "wallpaper",
    "plugin",
    "mod menu",
    "cheat",
    "trainer",
];

/// Minimum trimmed name length for a plausible game title.
const MIN_NAME_CHARS: usize = 2;

/// Decide whether a `(name, url)` pair is a real game entry.
///
/// An entry is rejected when its name or URL contains an excluded term, or
/// when the trimmed name is shorter than two characters. The check is a
/// substring match, so a term hiding inside a longer word also rejects;
/// that errs on the side of dropping borderline entries.
pub fn is_real_game(name: &str, url: &str) -> bool {
    let name_lower = name.to_lowercase();
    let url_lower = url.to_lowercase();

    let excluded = EXCLUDED_TERMS
        .iter()
        .any(|&term| name_lower.contains(term) || url_lower.contains(term));
    if excluded {
        return false;
    }

    name.trim().chars().count() >= MIN_NAME_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_games() {
        assert!(is_real_game(
            "Bloodborne",
            "https://www.superpsx.com/bloodborne-ps4-fpkg/"
        ));
        assert!(is_real_game(
            "NBA 2K21",
            "https://www.superpsx.com/nba-2k21-ps4-fpkg/"
        ));
    }

    #[test]
    fn test_rejects_by_name_term() {
        assert!(!is_real_game(
            "FTP Manager",
            "https://www.superpsx.com/ftp-manager-ps4-fpkg/"
        ));
        assert!(!is_real_game(
            "Orbis Patches Tool",
            "https://www.superpsx.com/orbis-patches-ps4-fpkg/"
        ));
        assert!(!is_real_game(
            "Save Data Resigner",
            "https://www.superpsx.com/resigner-ps4-fpkg/"
        ));
    }

    #[test]
    fn test_rejects_by_url_term() {
        // Name is clean but the URL still carries the term
        assert!(!is_real_game(
            "Apollo",
            "https://www.superpsx.com/apollo-save-tool-ps4-fpkg/"
        ));
        assert!(!is_real_game(
            "Remote Play",
            "https://www.superpsx.com/remote-play-installer-ps4-fpkg/"
        ));
    }

    #[test]
    fn test_substring_match_rejects_inner_terms() {
        // "hen" inside "kitchen" still rejects; substring matching is
        // deliberately aggressive
        assert!(!is_real_game(
            "Hells Kitchen",
            "https://www.superpsx.com/hells-kitchen-ps4-fpkg/"
        ));
    }

    #[test]
    fn test_rejects_short_names() {
        assert!(!is_real_game("", "https://www.superpsx.com/ps4-fpkg/"));
        assert!(!is_real_game("V", "https://www.superpsx.com/v-ps4-fpkg/"));
        assert!(!is_real_game("  ", "https://www.superpsx.com/x--ps4-fpkg/"));
    }

    #[test]
    fn test_multi_word_terms() {
        assert!(!is_real_game(
            "Mod Menu Pack",
            "https://www.superpsx.com/pack-ps4-fpkg/"
        ));
        // Hyphenated in the URL, the multi-word form does not match there,
        // and the name side has no term either
        assert!(is_real_game(
            "Dream Pack",
            "https://www.superpsx.com/mod-menu-pack-ps4-fpkg/"
        ));
    }
}
