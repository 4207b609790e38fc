mod commands;
mod handlers;

pub use commands::{split_words, Cli, Gesture, GestureLine};
pub use handlers::{handle_gesture, parse_gesture, run_session, Flow, SessionOptions};
