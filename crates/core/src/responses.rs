//! Topic keywords and the canned replies for each of them.
use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResponseTableError {
    #[error("Topic '{0}' has no candidate replies")]
    EmptyCandidates(Topic),
}

/// A recognized feeling or request the user can type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Sad,
    Stressed,
    Happy,
    Angry,
    Lonely,
    Tips,
    Motivation,
}

impl Topic {
    pub const ALL: [Topic; 7] = [
        Topic::Sad,
        Topic::Stressed,
        Topic::Happy,
        Topic::Angry,
        Topic::Lonely,
        Topic::Tips,
        Topic::Motivation,
    ];

    /// The exact, lowercase input that selects this topic.
    pub fn keyword(self) -> &'static str {
        match self {
            Topic::Sad => "sad",
            Topic::Stressed => "stressed",
            Topic::Happy => "happy",
            Topic::Angry => "angry",
            Topic::Lonely => "lonely",
            Topic::Tips => "tips",
            Topic::Motivation => "motivation",
        }
    }

    /// Matches an already normalized input against the topic keywords.
    pub fn from_keyword(keyword: &str) -> Option<Topic> {
        Topic::ALL.into_iter().find(|t| t.keyword() == keyword)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

const SAD: &[&str] = &[
    "I’m really sorry you’re feeling low today. 💛 Try taking a deep breath.",
    "Sometimes a short walk or listening to music can lift your mood.",
    "It’s okay to not feel okay. Would you like a self-care tip?",
];

const STRESSED: &[&str] = &[
    "Let’s pause for a second and breathe deeply together. 🌬️",
    "Stress is your body asking for rest — maybe take a break?",
    "Try writing your thoughts down — journaling helps release stress.",
];

const HAPPY: &[&str] = &[
    "That’s wonderful! Keep spreading your positive energy 🌞",
    "I’m so glad you’re happy today — keep doing what makes you smile!",
    "Joy shared is joy doubled 💚",
];

const ANGRY: &[&str] = &[
    "It’s okay to feel angry. Try to step away for a moment and breathe.",
    "Anger can be energy — channel it into something productive.",
    "Let’s calm down together… inhale… exhale. 🌸",
];

const LONELY: &[&str] = &[
    "You’re not alone — I’m here with you 🤍",
    "Try connecting with a friend or family member — human connection heals.",
    "Would you like me to suggest some positive self-affirmations?",
];

const TIPS: &[&str] = &[
    "🌱 Self-care tip: Drink water, rest your eyes, and go easy on yourself.",
    "🌻 Remember: You’ve survived 100% of your bad days so far.",
    "🌞 Every sunrise is a new beginning — keep moving forward.",
];

const MOTIVATION: &[&str] = &[
    "💪 You are stronger than you think!",
    "🌸 Progress, not perfection — small steps matter.",
    "🌈 Tough times never last, but tough people do!",
];

static BUILTIN: Lazy<ResponseTable> = Lazy::new(|| {
    let entries = Topic::ALL.into_iter().map(|topic| {
        let replies = match topic {
            Topic::Sad => SAD,
            Topic::Stressed => STRESSED,
            Topic::Happy => HAPPY,
            Topic::Angry => ANGRY,
            Topic::Lonely => LONELY,
            Topic::Tips => TIPS,
            Topic::Motivation => MOTIVATION,
        };
        (topic, replies.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    });
    ResponseTable {
        entries: entries.collect(),
    }
});

/// Immutable mapping from topic to its candidate replies.
///
/// Every topic present in the table has at least one reply; topics missing
/// from a custom table are treated as unrecognized input.
#[derive(Debug, Clone)]
pub struct ResponseTable {
    entries: HashMap<Topic, Vec<String>>,
}

impl ResponseTable {
    pub fn new<I>(entries: I) -> Result<Self, ResponseTableError>
    where
        I: IntoIterator<Item = (Topic, Vec<String>)>,
    {
        let mut table = HashMap::new();
        for (topic, replies) in entries {
            if replies.is_empty() {
                return Err(ResponseTableError::EmptyCandidates(topic));
            }
            table.insert(topic, replies);
        }
        Ok(Self { entries: table })
    }

    /// The table shipped with the app, built once per process.
    pub fn builtin() -> &'static ResponseTable {
        &BUILTIN
    }

    pub fn candidates(&self, topic: Topic) -> Option<&[String]> {
        self.entries.get(&topic).map(Vec::as_slice)
    }

    pub fn topics(&self) -> impl Iterator<Item = Topic> + '_ {
        Topic::ALL
            .into_iter()
            .filter(|t| self.entries.contains_key(t))
    }

    /// Picks one reply for `topic` uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, topic: Topic, rng: &mut R) -> Option<&str> {
        self.candidates(topic)?.choose(rng).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_builtin_table_covers_every_topic() {
        let table = ResponseTable::builtin();
        for topic in Topic::ALL {
            let replies = table.candidates(topic).unwrap();
            assert!(!replies.is_empty(), "{topic} has no replies");
        }
        assert_eq!(table.topics().count(), Topic::ALL.len());
    }

    #[test]
    fn test_keyword_round_trip() {
        for topic in Topic::ALL {
            assert_eq!(Topic::from_keyword(topic.keyword()), Some(topic));
        }
        assert_eq!(Topic::from_keyword("banana"), None);
        assert_eq!(Topic::from_keyword("Sad"), None);
        assert_eq!(Topic::from_keyword(""), None);
    }

    #[test]
    fn test_pick_is_member_of_candidates() {
        let table = ResponseTable::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for topic in Topic::ALL {
            let replies = table.candidates(topic).unwrap();
            for _ in 0..50 {
                let reply = table.pick(topic, &mut rng).unwrap();
                assert!(replies.iter().any(|r| r == reply));
            }
        }
    }

    #[test]
    fn test_pick_reaches_every_candidate() {
        let table = ResponseTable::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        let replies = table.candidates(Topic::Happy).unwrap();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(table.pick(Topic::Happy, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), replies.len());
    }

    #[test]
    fn test_single_candidate_is_deterministic() {
        let table =
            ResponseTable::new([(Topic::Tips, vec!["Drink water.".to_string()])]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(table.pick(Topic::Tips, &mut rng), Some("Drink water."));
        }
    }

    #[test]
    fn test_empty_candidates_rejected() {
        let err = ResponseTable::new([(Topic::Sad, vec![])]).unwrap_err();
        assert_eq!(err, ResponseTableError::EmptyCandidates(Topic::Sad));
        assert_eq!(err.to_string(), "Topic 'sad' has no candidate replies");
    }

    #[test]
    fn test_missing_topic_has_no_candidates() {
        let table = ResponseTable::new([(Topic::Sad, vec!["there".to_string()])]).unwrap();
        assert!(table.candidates(Topic::Happy).is_none());
        let mut rng = StdRng::seed_from_u64(3);
        assert!(table.pick(Topic::Happy, &mut rng).is_none());
        assert_eq!(table.topics().collect::<Vec<_>>(), vec![Topic::Sad]);
    }
}
