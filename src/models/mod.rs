pub mod game;

pub use game::{Alert, GameEvent, Rejection, Session, ValidationOutcome};
