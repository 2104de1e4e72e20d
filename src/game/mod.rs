pub mod engine;
pub mod root_words;
pub mod validator;

pub use engine::{EngineError, GameEngine};
pub use root_words::{RootWordError, RootWordList, RootWordSource};
pub use validator::WordValidator;
