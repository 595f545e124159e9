use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::ping::ping_handler,
        crate::handlers::default::default_route_handler,
        crate::handlers::movie::list::get_movies_handler,
        crate::handlers::movie::genres::get_genres_handler,
        crate::handlers::movie::top::top_movies_handler,
        crate::handlers::movie::details::movie_details_handler,
        crate::handlers::movie::similar::similar_movies_handler,
        crate::handlers::news::list::get_news_handler,
        crate::handlers::news::details::news_details_handler,
        crate::handlers::contact::submit::contact_submit_handler,
        crate::handlers::view::home::create_home_view_handler,
        crate::handlers::view::home::get_hero_handler,
        crate::handlers::view::home::select_hero_handler,
        crate::handlers::view::rating::create_movie_view_handler,
        crate::handlers::view::rating::get_rating_handler,
        crate::handlers::view::rating::hover_rating_handler,
        crate::handlers::view::rating::select_rating_handler,
        crate::handlers::view::contact::create_contact_view_handler,
        crate::handlers::view::contact::get_contact_view_handler,
        crate::handlers::view::contact::update_contact_field_handler,
        crate::handlers::view::contact::submit_contact_view_handler,
        crate::handlers::view::remove::remove_view_handler,
    ),
    components(
        schemas(
            crate::models::ContactForm,
            crate::models::HeroSlideReqBody,
            crate::models::HoverReqBody,
            crate::models::SelectReqBody,
            crate::models::ContactFieldReqBody,

            crate::models::GenericResponse,
            crate::models::ValidationErrResponse,
            crate::models::MovieListResponse,
            crate::models::MoviesResponse,
            crate::models::GenresResponse,
            crate::models::MovieDetailsResponse,
            crate::models::NewsListResponse,
            crate::models::NewsResponse,
            crate::models::HomeViewResponse,
            crate::models::HeroResponse,
            crate::models::RatingResponse,
            crate::models::ContactViewResponse,

            crate::models::Movie,
            crate::models::MovieDetails,
            crate::models::Review,
            crate::models::NewsArticle,
            crate::models::StarBreakdown,
            crate::models::RatingState,
            crate::models::ContactFormState,

            crate::models::ContactField,
            crate::models::FormStatus,
            crate::models::MovieSortKey,
            crate::models::NewsSortKey,
        )
    ),
    tags(
        (name = "Debugging API", description = "API for debugging purposes"),
        (name = "Movie API", description = "Catalog listing, details and recommendations"),
        (name = "News API", description = "Movie news articles"),
        (name = "Contact API", description = "Contact form submission"),
        (name = "View API", description = "Per page state: hero carousel, star rating and contact form")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_movie_routes() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/v1/movies"));
        assert!(paths.contains_key("/api/v1/movies/{movie_id}/similar"));
        assert!(paths.contains_key("/api/v1/view/contact/{view_id}/submit"));
    }
}
