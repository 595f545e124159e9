pub mod error_handler;
pub mod filter_sort;
pub mod misc;
pub mod similarity;
pub mod validation;

pub use error_handler::AppError;
pub use filter_sort::*;
pub use misc::*;
pub use similarity::{similar_movies, similarity_score};
pub use validation::validate_contact_form;
pub use validation::validate_email_shape;
pub use validation::validate_message;
pub use validation::validate_name;
pub use validation::ValidatedBody;
