use std::cmp::Ordering;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::{
    constants::ALL_GENRES,
    models::{Movie, MovieSortKey, NewsArticle, NewsSortKey},
};

/// Search, genre and sort selection of the movie listing
#[derive(Debug, Clone, PartialEq)]
pub struct MovieQuery {
    pub text: String,
    pub genre: String,
    pub sort_key: Option<MovieSortKey>,
}

impl Default for MovieQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            genre: ALL_GENRES.to_owned(),
            sort_key: None,
        }
    }
}

impl MovieQuery {
    /// Inclusion predicate of the listing
    pub fn matches(&self, movie: &Movie) -> bool {
        let matches_genre = self.genre == ALL_GENRES || movie.genre == self.genre;
        matches_genre
            && movie
                .title
                .to_lowercase()
                .contains(&self.text.to_lowercase())
    }
}

/// Collation style string order. Letters are compared without accents and
/// case first, then accents (plain before accented), then case (lower
/// before upper), and finally the raw text.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| accented(a).cmp(&accented(b)))
        .then_with(|| case_marks(a).cmp(&case_marks(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn accented(text: &str) -> String {
    text.nfd().flat_map(char::to_lowercase).collect()
}

fn case_marks(text: &str) -> Vec<bool> {
    text.nfd().map(char::is_uppercase).collect()
}

/// Filters the catalog with the query and orders the result.
/// The input is never touched, sorting is stable.
pub fn filter_and_sort(movies: &[Movie], query: &MovieQuery) -> Vec<Movie> {
    let mut result: Vec<Movie> = movies
        .iter()
        .filter(|movie| query.matches(movie))
        .cloned()
        .collect();
    if let Some(key) = query.sort_key {
        sort_movies(&mut result, key);
    }
    result
}

pub fn sort_movies(movies: &mut [Movie], key: MovieSortKey) {
    match key {
        MovieSortKey::Title => movies.sort_by(|a, b| locale_compare(&a.title, &b.title)),
        MovieSortKey::Rating => movies.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        MovieSortKey::Year => movies.sort_by(|a, b| b.year.cmp(&a.year)),
    }
}

/// Values of the genre selector: `All` then every genre in first-seen order
pub fn genres(movies: &[Movie]) -> Vec<String> {
    let mut genres = vec![ALL_GENRES.to_owned()];
    for movie in movies {
        if !genres.contains(&movie.genre) {
            genres.push(movie.genre.clone());
        }
    }
    genres
}

/// Slice of the catalog ordered by rating, highest first
pub fn top_rated(movies: &[Movie], skip: usize, take: usize) -> Vec<Movie> {
    let mut sorted = movies.to_vec();
    sort_movies(&mut sorted, MovieSortKey::Rating);
    sorted.into_iter().skip(skip).take(take).collect()
}

/// Orders news articles, newest first for [`NewsSortKey::Date`].
/// Articles with an unparsable date go last.
pub fn sort_news(articles: &[NewsArticle], key: NewsSortKey) -> Vec<NewsArticle> {
    let mut sorted = articles.to_vec();
    match key {
        NewsSortKey::Date => sorted.sort_by(|a, b| b.published_on().cmp(&a.published_on())),
        NewsSortKey::Category => sorted.sort_by(|a, b| locale_compare(&a.category, &b.category)),
        NewsSortKey::Title => sorted.sort_by(|a, b| locale_compare(&a.title, &b.title)),
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Movie> {
        vec![
            Movie::new(1, "Mad Max: Fury Road", "Action", 2015, 4.5),
            Movie::new(2, "World War Z", "Drama", 2013, 3.5),
            Movie::new(3, "John Wick", "Action", 2014, 4.5),
            Movie::new(4, "arrival", "Sci-Fi", 2016, 4.0),
            Movie::new(5, "Warrior (2011)", "Drama", 2011, 4.0),
        ]
    }

    fn query(text: &str, genre: &str, sort_key: Option<MovieSortKey>) -> MovieQuery {
        MovieQuery {
            text: text.to_owned(),
            genre: genre.to_owned(),
            sort_key,
        }
    }

    fn ids(movies: &[Movie]) -> Vec<u32> {
        movies.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let movies = vec![
            Movie::new(1, "Inception", "Action", 2010, 4.8),
            Movie::new(2, "World War Z", "Drama", 2013, 3.5),
            Movie::new(3, "The Notebook", "Action", 2004, 4.0),
        ];
        let result = filter_and_sort(&movies, &query("War", ALL_GENRES, None));
        assert_eq!(ids(&result), vec![2]);
        let result = filter_and_sort(&catalog(), &query("wAr", ALL_GENRES, None));
        assert_eq!(ids(&result), vec![2, 5]);
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let movies = catalog();
        let result = filter_and_sort(&movies, &MovieQuery::default());
        assert_eq!(result, movies);
        let result = filter_and_sort(&movies, &query("", ALL_GENRES, Some(MovieSortKey::Year)));
        assert_eq!(result.len(), movies.len());
        assert_eq!(ids(&result), vec![4, 1, 3, 2, 5]);
    }

    #[test]
    fn test_genre_filter() {
        let result = filter_and_sort(&catalog(), &query("", "Action", None));
        assert_eq!(ids(&result), vec![1, 3]);
        let result = filter_and_sort(&catalog(), &query("", "Western", None));
        assert!(result.is_empty());
        let result = filter_and_sort(&catalog(), &query("war", "Drama", None));
        assert_eq!(ids(&result), vec![2, 5]);
    }

    #[test]
    fn test_special_characters_are_literal() {
        let result = filter_and_sort(&catalog(), &query("(2011)", ALL_GENRES, None));
        assert_eq!(ids(&result), vec![5]);
        let result = filter_and_sort(&catalog(), &query(".*", ALL_GENRES, None));
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let result = filter_and_sort(&[], &query("x", ALL_GENRES, Some(MovieSortKey::Title)));
        assert!(result.is_empty());
    }

    #[test]
    fn test_rating_sort_is_descending_and_stable() {
        let result = filter_and_sort(&catalog(), &query("", ALL_GENRES, Some(MovieSortKey::Rating)));
        assert_eq!(ids(&result), vec![1, 3, 4, 5, 2]);
        assert!(result.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let result = filter_and_sort(&catalog(), &query("", ALL_GENRES, Some(MovieSortKey::Title)));
        assert_eq!(ids(&result), vec![4, 3, 1, 5, 2]);
    }

    #[test]
    fn test_title_sort_folds_accents() {
        let movies = vec![
            Movie::new(1, "Amy", "Documentary", 2015, 4.0),
            Movie::new(2, "Amélie", "Romance", 2001, 4.5),
            Movie::new(3, "Zodiac", "Thriller", 2007, 4.2),
            Movie::new(4, "Élite Squad", "Action", 2007, 4.1),
        ];
        let result = filter_and_sort(&movies, &query("", ALL_GENRES, Some(MovieSortKey::Title)));
        assert_eq!(ids(&result), vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_locale_compare_tie_breaks() {
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_compare("heat", "Heat"), Ordering::Less);
        assert_eq!(locale_compare("Heat", "heat"), Ordering::Greater);
        assert_eq!(locale_compare("Amélie", "Amélie"), Ordering::Equal);
    }

    #[test]
    fn test_genres_start_with_all() {
        assert_eq!(genres(&catalog()), vec!["All", "Action", "Drama", "Sci-Fi"]);
        assert_eq!(genres(&[]), vec!["All"]);
    }

    #[test]
    fn test_top_rated_rows() {
        let movies = catalog();
        assert_eq!(ids(&top_rated(&movies, 0, 3)), vec![1, 3, 4]);
        assert_eq!(ids(&top_rated(&movies, 3, 10)), vec![5, 2]);
        assert!(top_rated(&movies, 10, 6).is_empty());
    }

    fn article(id: u32, title: &str, category: &str, date: &str) -> NewsArticle {
        NewsArticle {
            id,
            title: title.to_owned(),
            category: category.to_owned(),
            date: date.to_owned(),
            author: "Staff".to_owned(),
            image: None,
            excerpt: String::new(),
            content: String::new(),
        }
    }

    #[test]
    fn test_sort_news() {
        let articles = vec![
            article(1, "IMAX Technology", "Technology", "2024-11-18"),
            article(2, "Dune: Part Three", "Production Update", "2024-12-01"),
            article(3, "AI in Filmmaking", "Technology", "2024-11-25"),
        ];
        let by_date = sort_news(&articles, NewsSortKey::Date);
        assert_eq!(by_date.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2, 3, 1]);
        let by_category = sort_news(&articles, NewsSortKey::Category);
        assert_eq!(by_category.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2, 1, 3]);
        let by_title = sort_news(&articles, NewsSortKey::Title);
        assert_eq!(by_title.iter().map(|a| a.id).collect::<Vec<_>>(), vec![3, 2, 1]);
    }
}
