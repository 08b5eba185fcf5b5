//! SeaORM adapters. Query code lives here and returns `DbErr`; the repos
//! layer converts to `DomainError`.

pub mod projects_sea;
pub mod users_sea;

use time::OffsetDateTime;

/// Next value for an `updated_at` column.
///
/// `updated_at` must strictly increase on every mutating write, so when the
/// clock has not advanced past the stored stamp the new value is bumped one
/// microsecond forward.
pub(crate) fn next_updated_at(prev: OffsetDateTime) -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    if now > prev {
        now
    } else {
        prev + time::Duration::microseconds(1)
    }
}
