use crate::{constants::*, models::Movie};

/// Heuristic closeness of `candidate` to `reference`, 0 to 6.
///
/// Same genre is worth 3, release years less than 5 apart 2, and ratings
/// less than half a star apart 1.
pub fn similarity_score(reference: &Movie, candidate: &Movie) -> u8 {
    let mut score = 0;
    if candidate.genre == reference.genre {
        score += SCORE_SAME_GENRE;
    }
    if (candidate.year - reference.year).abs() < SIMILAR_YEAR_WINDOW {
        score += SCORE_CLOSE_YEAR;
    }
    if (candidate.rating - reference.rating).abs() < SIMILAR_RATING_WINDOW {
        score += SCORE_CLOSE_RATING;
    }
    score
}

/// Ranks every other movie of the catalog by similarity to `reference` and
/// keeps the best `limit`. Ties keep catalog order and zero scores are not
/// filtered out.
pub fn similar_movies(all: &[Movie], reference: &Movie, limit: usize) -> Vec<Movie> {
    let mut scored: Vec<(u8, &Movie)> = all
        .iter()
        .filter(|movie| movie.id != reference.id)
        .map(|movie| (similarity_score(reference, movie), movie))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, movie)| movie.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Movie> {
        vec![
            Movie::new(1, "Inception", "Sci-Fi", 2010, 4.8),
            Movie::new(2, "Interstellar", "Sci-Fi", 2014, 4.7),
            Movie::new(3, "The Notebook", "Romance", 2004, 4.0),
            Movie::new(4, "Arrival", "Sci-Fi", 2016, 4.2),
            Movie::new(5, "Shutter Island", "Thriller", 2010, 4.5),
            Movie::new(6, "Blade Runner", "Sci-Fi", 1982, 4.1),
            Movie::new(7, "La La Land", "Romance", 2016, 4.0),
        ]
    }

    fn ids(movies: &[Movie]) -> Vec<u32> {
        movies.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_similarity_score() {
        let movies = catalog();
        let inception = &movies[0];
        assert_eq!(similarity_score(inception, &movies[1]), 6);
        assert_eq!(similarity_score(inception, &movies[2]), 0);
        assert_eq!(similarity_score(inception, &movies[3]), 3);
        assert_eq!(similarity_score(inception, &movies[4]), 3);
        assert_eq!(similarity_score(inception, &movies[5]), 3);
    }

    #[test]
    fn test_year_window_is_exclusive() {
        let reference = Movie::new(1, "A", "Drama", 2010, 1.0);
        let four_apart = Movie::new(2, "B", "Comedy", 2014, 3.0);
        let five_apart = Movie::new(3, "C", "Comedy", 2015, 3.0);
        assert_eq!(similarity_score(&reference, &four_apart), 2);
        assert_eq!(similarity_score(&reference, &five_apart), 0);
    }

    #[test]
    fn test_similar_movies_ranking() {
        let movies = catalog();
        let result = similar_movies(&movies, &movies[0], DEFAULT_SIMILAR_LIMIT);
        // 2 => 6, 4 => 3, 5 => 3, 6 => 3, 3 => 0, 7 => 0
        assert_eq!(ids(&result), vec![2, 4, 5, 6, 3, 7]);
        assert!(!result.iter().any(|m| m.id == 1));
    }

    #[test]
    fn test_similar_movies_limit() {
        let movies = catalog();
        assert_eq!(similar_movies(&movies, &movies[0], 2).len(), 2);
        assert_eq!(similar_movies(&movies, &movies[0], 100).len(), movies.len() - 1);
        assert!(similar_movies(&movies, &movies[0], 0).is_empty());
        assert!(similar_movies(&movies[..1], &movies[0], 6).is_empty());
    }

    #[test]
    fn test_similar_movies_is_deterministic() {
        let movies = catalog();
        let first = similar_movies(&movies, &movies[2], 4);
        let second = similar_movies(&movies, &movies[2], 4);
        assert_eq!(first, second);
    }
}
