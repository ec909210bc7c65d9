pub mod config;
pub mod logger;
pub mod error;
pub mod clock;
pub mod text_utils;
pub mod words;
pub mod prompt;
pub mod launcher;
pub mod post_template;
pub mod new_post;
pub mod gallery;
mod test_data;
