use crate::error::{BotError, Result};

pub const WELCOME_GREETINGS: [&str; 8] = [
    "Wah ada member baru nih!",
    "Halo gan, selamat datang di YoiGan! 🎉",
    "Eh ada yang baru gabung nih~",
    "Welcome gan di YoiGan! 👋",
    "Hai hai, selamat datang ya!",
    "Akhirnya gabung juga nih 🙂",
    "Selamat datang di YoiGan! Santai aja di sini~",
    "Wih ada agan baru! Selamat datang ya 🎉",
];

pub const WELCOME_QUESTIONS: [&str; 8] = [
    "Btw, apa yang bawa agan ke sini?",
    "Boleh tau ga, biasanya suka main game apa?",
    "Kenalin dong, dari mana nih?",
    "Ini pertama kalinya gabung di sini ya gan?",
    "Suka ngobrolin topik apa biasanya?",
    "Lagi nyari komunitas buat apa nih?",
    "Ada yang bisa dibantu ga?",
    "Penasaran nih, dapet info YoiGan dari mana?",
];

/// Greeting and follow-up question templates. Both pools are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomePools {
    greetings: Vec<String>,
    questions: Vec<String>,
}

impl WelcomePools {
    pub fn new(greetings: Vec<String>, questions: Vec<String>) -> Result<Self> {
        if greetings.is_empty() || questions.is_empty() {
            return Err(BotError::Config(
                "Welcome pools must contain at least one greeting and one question".to_string(),
            ));
        }
        Ok(Self {
            greetings,
            questions,
        })
    }

    pub fn greetings(&self) -> &[String] {
        &self.greetings
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }
}

impl Default for WelcomePools {
    fn default() -> Self {
        Self {
            greetings: WELCOME_GREETINGS.iter().map(ToString::to_string).collect(),
            questions: WELCOME_QUESTIONS.iter().map(ToString::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pools_hold_eight_distinct_entries_each() {
        let pools = WelcomePools::default();
        for pool in [pools.greetings(), pools.questions()] {
            let mut unique = pool.to_vec();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), 8);
        }
    }

    #[test]
    fn empty_pool_is_rejected() {
        let result = WelcomePools::new(vec!["hi".to_string()], Vec::new());
        assert!(matches!(result, Err(BotError::Config(_))));
    }
}
