//! Starter data inserted into an empty database.

use moodquotes_core::mood::MoodType;
use moodquotes_core::types::DbId;

use crate::repositories::AuthorRepo;
use crate::DbPool;

/// Seed author: `(name, bio)`.
pub const SEED_AUTHORS: &[(&str, &str)] = &[
    ("Maya Angelou", "American poet, memoirist, and civil rights activist"),
    ("Viktor Frankl", "Austrian neurologist, psychiatrist, and Holocaust survivor"),
    ("Rumi", "13th-century Persian poet, Islamic scholar, and Sufi mystic"),
    ("Buddha", "Spiritual teacher and founder of Buddhism"),
    ("Marcus Aurelius", "Roman emperor and Stoic philosopher"),
];

/// Seed quote: `(text, index into SEED_AUTHORS, mood)`.
pub const SEED_QUOTES: &[(&str, usize, MoodType)] = &[
    (
        "You are braver than you believe, stronger than you seem, and smarter than you think.",
        0,
        MoodType::LowSelfEsteem,
    ),
    (
        "When we can no longer change a situation, we are challenged to change ourselves.",
        1,
        MoodType::Depression,
    ),
    (
        "Yesterday I was clever, so I wanted to change the world. Today I am wise, so I am changing myself.",
        2,
        MoodType::Overwhelmed,
    ),
    (
        "Peace comes from within. Do not seek it without.",
        3,
        MoodType::Anxiety,
    ),
    (
        "You have power over your mind - not outside events. Realize this, and you will find strength.",
        4,
        MoodType::Stress,
    ),
    (
        "The darkest moments are to be cherished, for they are the greatest teachers.",
        2,
        MoodType::Sadness,
    ),
    (
        "Focus on the step in front of you, not the whole staircase.",
        4,
        MoodType::LackOfFocus,
    ),
    (
        "You yourself, as much as anybody in the entire universe, deserve your love and affection.",
        3,
        MoodType::Loneliness,
    ),
];

/// Insert the seed authors and quotes if the `authors` table is empty.
///
/// Runs in a single transaction. Returns `true` if data was inserted.
pub async fn seed_if_empty(pool: &DbPool) -> Result<bool, sqlx::Error> {
    if AuthorRepo::count(pool).await? > 0 {
        tracing::debug!("Authors present, skipping seed");
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    let mut author_ids: Vec<DbId> = Vec::with_capacity(SEED_AUTHORS.len());
    for (name, bio) in SEED_AUTHORS {
        let id: DbId =
            sqlx::query_scalar("INSERT INTO authors (name, bio) VALUES ($1, $2) RETURNING id")
                .bind(*name)
                .bind(*bio)
                .fetch_one(&mut *tx)
                .await?;
        author_ids.push(id);
    }

    for (text, author_idx, mood) in SEED_QUOTES {
        sqlx::query("INSERT INTO quotes (text, author_id, mood_type) VALUES ($1, $2, $3)")
            .bind(*text)
            .bind(author_ids[*author_idx])
            .bind(mood.value())
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    tracing::info!(
        authors = SEED_AUTHORS.len(),
        quotes = SEED_QUOTES.len(),
        "Seeded database"
    );
    Ok(true)
}
