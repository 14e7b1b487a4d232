//! Joke generation: prompt construction, the service call, and response interpretation.

pub mod interpret;
pub mod jokes;
pub mod prompt;

pub use interpret::{blocked_categories, interpret, interpret_result, EMPTY_RESPONSE_MESSAGE};
pub use jokes::JokeGenerator;
pub use prompt::build_prompt;
