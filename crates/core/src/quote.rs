use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

/// Attribution shared by every quote in the book.
pub const AUTHOR: &str = "Naval Ravikant";

const QUOTES: &[&str] = &[
    "Seek wealth, not money or status. Wealth is having assets that earn while you sleep.",
    "You're not going to get rich renting out your time. You must own equity to gain your financial freedom.",
    "Learn to sell. Learn to build. If you can do both, you will be unstoppable.",
    "Arm yourself with specific knowledge, accountability, and leverage.",
    "Specific knowledge is knowledge that you cannot be trained for.",
    "Play iterated games. All the returns in life come from compound interest.",
    "Pick business partners with high intelligence, energy, and, above all, integrity.",
    "Don't partner with cynics and pessimists. Their beliefs are self-fulfilling.",
    "Learn to love to read. Reading is the ultimate meta-skill.",
    "The most important skill for getting rich is becoming a perpetual learner.",
    "Embrace accountability, and take business risks under your own name.",
    "There are no get rich quick schemes. That's just someone else getting rich off you.",
    "You will get rich by giving society what it wants but does not yet know how to get.",
    "If you secretly despise wealth, it will elude you.",
    "Ignore people playing status games. They gain status by attacking people playing wealth creation games.",
    "You're not going to get rich renting out your time.",
    "Code and media are permissionless leverage.",
    "Most of life is a search for who and what needs you the most.",
    "The Internet has massively broadened the possible space of careers.",
    "Escape competition through authenticity.",
    "Doing one thing better than anyone else is the key to wealth.",
    "Apply specific knowledge, with leverage, and eventually you will get what you deserve.",
    "When you're finally wealthy, you'll realize that it wasn't what you were seeking in the first place.",
    "Earn with your mind, not your time.",
    "Become the best in the world at what you do. Keep redefining what you do until this is true.",
    "School, politics, sports, and games train us to compete against others. True rewards come from competing against yourself.",
    "The most interesting people are the ones who don't fit into your average box.",
    "Happiness is a choice and a skill and you can dedicate yourself to learning that skill.",
    "Desire is a contract that you make with yourself to be unhappy until you get what you want.",
    "Happiness is being present and not thinking about the past or future.",
    "Peace is happiness at rest. Happiness is peace in motion.",
    "The three big ones in life are wealth, health, and happiness. We pursue them in that order, but their importance is reverse.",
    "All the real benefits in life come from compound interest.",
    "Play long-term games with long-term people.",
    "Life is a single-player game.",
    "Jealousy is a pointless emotion.",
    "You can't be normal and expect abnormal returns.",
    "Reading is faster than listening. Doing is faster than watching.",
    "Busy is the death of productivity.",
    "The modern mind is overstimulated and the modern body is understimulated.",
    "Art is creativity. Art is anything done for its own sake.",
    "Money is how we transfer time and wealth. Money is social credits.",
    "You make your own luck if you stay at it long enough.",
    "Karma is just you, repeating your patterns, virtues, and flaws until you finally get what you deserve.",
    "Doctors won't make you healthy. Teachers won't make you smart. Gurus won't make you calm. You have to do it yourself.",
    "A fit body, a calm mind, a house full of love. These things cannot be bought\u{2014}they must be earned.",
    "Technology is the application of knowledge to control the natural world.",
    "Retirement is when you stop sacrificing today for an imaginary tomorrow.",
    "If you can't see yourself working with someone for life, don't work with them for a day.",
    "Reading a book isn't a race \u{2013} the better the book, the slower it should be absorbed.",
];

/// A single quote with its attribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote body, without surrounding quotation marks
    pub text: String,
    /// Person the quote is attributed to
    pub author: String,
}

impl Quote {
    /// Create a quote attributed to [`AUTHOR`]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: AUTHOR.to_string(),
        }
    }
}

/// How quotes are picked from the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// The first quotes in book order
    #[default]
    Featured,
    /// Duplicate-free pick driven by a seeded generator
    Seeded(u64),
    /// Duplicate-free pick driven by OS entropy
    Random,
}

/// Immutable, non-empty list of quote texts compiled into the binary
#[derive(Debug, Clone, Copy)]
pub struct QuoteBook {
    texts: &'static [&'static str],
}

impl Default for QuoteBook {
    fn default() -> Self {
        Self::embedded()
    }
}

impl QuoteBook {
    /// The book shipped with the binary
    #[must_use]
    pub const fn embedded() -> Self {
        Self { texts: QUOTES }
    }

    /// Number of quotes in the book
    #[must_use]
    pub const fn len(&self) -> usize {
        self.texts.len()
    }

    /// Always false; a book cannot be constructed empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Quote at `index`, if any
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Quote> {
        self.texts.get(index).map(|text| Quote::new(*text))
    }

    /// Iterate over every quote in book order
    pub fn iter(&self) -> impl Iterator<Item = Quote> + '_ {
        self.texts.iter().map(|text| Quote::new(*text))
    }

    /// Pick `count` distinct quotes.
    ///
    /// `count` is clamped to `1..=len()`, so the result is never empty and
    /// never repeats a quote.
    #[must_use]
    pub fn select(&self, selection: Selection, count: usize) -> Vec<Quote> {
        let amount = count.clamp(1, self.len());
        let indices: Vec<usize> = match selection {
            Selection::Featured => (0..amount).collect(),
            Selection::Seeded(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                index::sample(&mut rng, self.len(), amount).into_vec()
            }
            Selection::Random => index::sample(&mut rand::rng(), self.len(), amount).into_vec(),
        };

        tracing::debug!(
            selection = ?selection,
            requested = count,
            selected = ?indices,
            "Selected quotes"
        );

        indices
            .into_iter()
            .map(|i| Quote::new(self.texts[i]))
            .collect()
    }
}
