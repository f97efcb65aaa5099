//! Joke categories and the crowd's response to each.

use strum::{AsRefStr, Display, EnumIter, EnumString, VariantNames};

/// A joke category the crowd knows how to react to.
///
/// Parsing is exact and case-sensitive: `"dad"` is a category, `"Dad"` and
/// `" dad"` are not.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr, VariantNames,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    Crowd,
    KnockKnock,
    Dad,
}

impl Category {
    /// What the crowd does when this joke lands.
    pub fn response(self) -> &'static str {
        match self {
            Category::Crowd => "You riff with the crowd. Hahaha!",
            Category::KnockKnock => "Who's there? The audience echos back...",
            Category::Dad => "You tell a dad joke. Some groan, some chuckle.",
        }
    }
}

/// Whatever the player typed at the joke prompt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JokeKind {
    Known(Category),
    Unrecognized(String),
}

impl JokeKind {
    /// Response printed for anything that is not a known category.
    pub const NOT_A_JOKE: &'static str = "That's not a joke!";

    /// Classifies raw input. Never fails.
    pub fn parse(input: &str) -> Self {
        match input.parse::<Category>() {
            Ok(category) => JokeKind::Known(category),
            Err(_) => JokeKind::Unrecognized(input.to_string()),
        }
    }

    /// The line printed when this kind is dispatched.
    pub fn response(&self) -> &'static str {
        match self {
            JokeKind::Known(category) => category.response(),
            JokeKind::Unrecognized(_) => Self::NOT_A_JOKE,
        }
    }

    /// The input this kind was parsed from.
    pub fn as_str(&self) -> &str {
        match self {
            JokeKind::Known(category) => category.as_ref(),
            JokeKind::Unrecognized(raw) => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_category_names() {
        assert_eq!(Category::VARIANTS, &["crowd", "knock-knock", "dad"]);
        assert_eq!(Category::KnockKnock.to_string(), "knock-knock");
    }

    #[test]
    fn test_parse_known_categories() {
        for category in Category::iter() {
            assert_eq!(JokeKind::parse(category.as_ref()), JokeKind::Known(category));
        }
    }

    #[test]
    fn test_parse_is_exact() {
        for raw in ["Dad", " dad", "dad ", "knock knock", "KNOCK-KNOCK", "", "pun"] {
            let kind = JokeKind::parse(raw);
            assert_eq!(kind, JokeKind::Unrecognized(raw.to_string()));
            assert_eq!(kind.response(), JokeKind::NOT_A_JOKE);
            assert_eq!(kind.as_str(), raw);
        }
    }

    #[test]
    fn test_responses() {
        assert_eq!(
            JokeKind::parse("crowd").response(),
            "You riff with the crowd. Hahaha!"
        );
        assert_eq!(
            JokeKind::parse("knock-knock").response(),
            "Who's there? The audience echos back..."
        );
        assert_eq!(
            JokeKind::parse("dad").response(),
            "You tell a dad joke. Some groan, some chuckle."
        );
    }
}
