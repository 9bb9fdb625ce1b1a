//! Randomized greetings for members joining the server.

mod composer;
mod handler;
mod pools;

pub use composer::{RandomSource, ThreadRandom, WelcomeComposer};
pub use handler::handle_member_added;
pub use pools::{WELCOME_GREETINGS, WELCOME_QUESTIONS, WelcomePools};
