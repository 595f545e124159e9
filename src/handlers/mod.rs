pub mod contact;
pub mod default;
pub mod global_404;
pub mod movie;
pub mod news;
pub mod ping;
pub mod view;

pub use contact::submit::contact_submit_handler;

pub use default::default_route_handler;

pub use global_404::global_404_handler;

pub use movie::details::movie_details_handler;
pub use movie::genres::get_genres_handler;
pub use movie::list::get_movies_handler;
pub use movie::similar::similar_movies_handler;
pub use movie::top::top_movies_handler;

pub use news::details::news_details_handler;
pub use news::list::get_news_handler;

pub use ping::ping_handler;

pub use view::contact::create_contact_view_handler;
pub use view::contact::get_contact_view_handler;
pub use view::contact::submit_contact_view_handler;
pub use view::contact::update_contact_field_handler;
pub use view::home::create_home_view_handler;
pub use view::home::get_hero_handler;
pub use view::home::select_hero_handler;
pub use view::rating::create_movie_view_handler;
pub use view::rating::get_rating_handler;
pub use view::rating::hover_rating_handler;
pub use view::rating::select_rating_handler;
pub use view::remove::remove_view_handler;
