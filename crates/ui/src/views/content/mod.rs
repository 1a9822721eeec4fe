mod book;
mod media;
mod quiz;

pub use book::Book;
pub use media::MediaContent;
pub use quiz::QuizContent;
