use std::fmt::Display;

use rand::prelude::IndexedRandom;

use super::pools::WelcomePools;

/// Uniform choice of one item.
pub trait RandomSource: Send + Sync {
    /// Returns `None` only for an empty slice.
    fn pick<'a>(&self, items: &'a [String]) -> Option<&'a str>;
}

/// Draws from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick<'a>(&self, items: &'a [String]) -> Option<&'a str> {
        items.choose(&mut rand::rng()).map(String::as_str)
    }
}

pub struct WelcomeComposer {
    pools: WelcomePools,
    random: Box<dyn RandomSource>,
}

impl WelcomeComposer {
    pub fn new(pools: WelcomePools, random: Box<dyn RandomSource>) -> Self {
        Self { pools, random }
    }

    /// Builds `<mention> <greeting>\n\n<question>` from two independent draws.
    pub fn compose(&self, mention: impl Display) -> String {
        let greeting = self
            .random
            .pick(self.pools.greetings())
            .unwrap_or_default();
        let question = self
            .random
            .pick(self.pools.questions())
            .unwrap_or_default();
        format!("{mention} {greeting}\n\n{question}")
    }
}

impl Default for WelcomeComposer {
    fn default() -> Self {
        Self::new(WelcomePools::default(), Box::new(ThreadRandom))
    }
}
