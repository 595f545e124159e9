pub mod details;
pub mod genres;
pub mod list;
pub mod similar;
pub mod top;
