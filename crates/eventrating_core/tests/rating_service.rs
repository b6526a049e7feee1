use eventrating_core::db::open_db_in_memory;
use eventrating_core::{
    EventRatingService, InMemoryEventRatingRepository, RatingServiceError,
    SqliteEventRatingRepository, RATING_MAX, RATING_MIN,
};
use rusqlite::Connection;

#[test]
fn create_accepts_every_rating_in_bounds() {
    let conn = open_db_in_memory().unwrap();
    let service = EventRatingService::new(SqliteEventRatingRepository::try_new(&conn).unwrap());

    for rating in RATING_MIN..=RATING_MAX {
        let event_id = format!("evt-{rating}");
        let created = service
            .create_event_rating(event_id.as_str(), rating, "fine")
            .unwrap();

        let loaded = service.get_event_rating(&event_id).unwrap().unwrap();
        assert_eq!(loaded, created);
        assert_eq!(loaded.rating, rating);
    }
}

#[test]
fn create_rejects_rating_below_minimum_without_writing() {
    let conn = open_db_in_memory().unwrap();
    let service = EventRatingService::new(SqliteEventRatingRepository::try_new(&conn).unwrap());

    let err = service.create_event_rating("evt-1", 0, "zero").unwrap_err();
    assert!(matches!(err, RatingServiceError::InvalidRating(_)));
    assert_eq!(row_count(&conn), 0);
}

#[test]
fn create_rejects_rating_above_maximum_without_writing() {
    let conn = open_db_in_memory().unwrap();
    let service = EventRatingService::new(SqliteEventRatingRepository::try_new(&conn).unwrap());

    let err = service.create_event_rating("evt-1", 6, "six").unwrap_err();
    assert!(matches!(err, RatingServiceError::InvalidRating(_)));
    assert_eq!(row_count(&conn), 0);
}

#[test]
fn create_rejects_empty_event_id_without_writing() {
    let conn = open_db_in_memory().unwrap();
    let service = EventRatingService::new(SqliteEventRatingRepository::try_new(&conn).unwrap());

    let err = service.create_event_rating("", 3, "anonymous").unwrap_err();
    assert!(matches!(err, RatingServiceError::InvalidRating(_)));
    assert_eq!(row_count(&conn), 0);

    // The key was never stored, so lookup and list stay well-behaved.
    assert!(service.get_event_rating("").unwrap().is_none());
    assert!(service.list_event_ratings().unwrap().is_empty());
}

#[test]
fn in_memory_create_rejects_empty_event_id() {
    let service = EventRatingService::new(InMemoryEventRatingRepository::new());

    let err = service.create_event_rating("", 3, "anonymous").unwrap_err();
    assert!(matches!(err, RatingServiceError::InvalidRating(_)));

    assert!(service.get_event_rating("").unwrap().is_none());
    assert!(service.list_event_ratings().unwrap().is_empty());
}

#[test]
fn duplicate_create_maps_to_duplicate_error() {
    let conn = open_db_in_memory().unwrap();
    let service = EventRatingService::new(SqliteEventRatingRepository::try_new(&conn).unwrap());

    service.create_event_rating("evt-1", 5, "great").unwrap();
    let err = service
        .create_event_rating("evt-1", 2, "second thoughts")
        .unwrap_err();

    assert!(matches!(err, RatingServiceError::DuplicateEventId(id) if id == "evt-1"));
    assert_eq!(row_count(&conn), 1);
}

#[test]
fn get_missing_rating_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let service = EventRatingService::new(SqliteEventRatingRepository::try_new(&conn).unwrap());

    assert!(service.get_event_rating("evt-missing").unwrap().is_none());
}

#[test]
fn list_on_empty_store_returns_empty() {
    let conn = open_db_in_memory().unwrap();
    let service = EventRatingService::new(SqliteEventRatingRepository::try_new(&conn).unwrap());

    assert!(service.list_event_ratings().unwrap().is_empty());
}

#[test]
fn create_then_list_and_lookup_scenario() {
    let conn = open_db_in_memory().unwrap();
    let service = EventRatingService::new(SqliteEventRatingRepository::try_new(&conn).unwrap());

    service.create_event_rating("evt-1", 5, "great").unwrap();
    service.create_event_rating("evt-2", 1, "bad").unwrap();

    let mut ratings = service.list_event_ratings().unwrap();
    ratings.sort_by(|a, b| a.event_id.cmp(&b.event_id));
    assert_eq!(ratings.len(), 2);
    assert_eq!(ratings[0].event_id, "evt-1");
    assert_eq!(ratings[1].event_id, "evt-2");

    let looked_up = service.get_event_rating("evt-1").unwrap().unwrap();
    assert_eq!(looked_up.event_id, "evt-1");
    assert_eq!(looked_up.rating, 5);
    assert_eq!(looked_up.comment, "great");
}

#[test]
fn in_memory_repository_honors_service_contract() {
    let service = EventRatingService::new(InMemoryEventRatingRepository::new());

    let created = service.create_event_rating("evt-1", 5, "great").unwrap();
    let loaded = service.get_event_rating("evt-1").unwrap().unwrap();
    assert_eq!(loaded, created);

    let err = service
        .create_event_rating("evt-1", 3, "again")
        .unwrap_err();
    assert!(matches!(err, RatingServiceError::DuplicateEventId(id) if id == "evt-1"));

    assert!(service.get_event_rating("evt-other").unwrap().is_none());
    assert_eq!(service.list_event_ratings().unwrap().len(), 1);
}

#[test]
fn in_memory_repository_rejects_out_of_range_before_any_write() {
    let service = EventRatingService::new(InMemoryEventRatingRepository::new());

    let err = service.create_event_rating("evt-1", -3, "nope").unwrap_err();
    assert!(matches!(err, RatingServiceError::InvalidRating(_)));
    assert!(service.list_event_ratings().unwrap().is_empty());
}

fn row_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM event_ratings;", [], |row| row.get(0))
        .unwrap()
}
