pub mod heading;
pub mod link;
pub mod paragraph;

pub use heading::Heading;
pub use link::Link;
pub use paragraph::Paragraph;
