pub mod contact;
pub mod movie;
pub mod news;
pub mod rating;
pub mod request_schema;
pub mod response_schema;
pub mod review;

pub use contact::*;
pub use movie::*;
pub use news::*;
pub use rating::*;
pub use request_schema::*;
pub use response_schema::*;
pub use review::*;
