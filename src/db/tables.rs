/// Schema applied idempotently at startup.
///
/// Uniqueness of natural keys lives here rather than in application checks:
/// one hours row per (shop, day), one role row per (user, shop), globally
/// unique category names. Referential integrity is enforced by the engine
/// through the foreign-key clauses.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS shops (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    name         TEXT    NOT NULL,
    latitude     REAL    NOT NULL,
    longitude    REAL    NOT NULL,
    phone_number TEXT    NOT NULL,
    is_deleted   INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS shop_hours (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    shop_id     INTEGER NOT NULL REFERENCES shops (id),
    day_of_week INTEGER NOT NULL,
    open_time   TEXT    NOT NULL,
    close_time  TEXT    NOT NULL,
    UNIQUE (shop_id, day_of_week)
);

CREATE TABLE IF NOT EXISTS categories (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT    NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS products (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    shop_id     INTEGER NOT NULL REFERENCES shops (id),
    category_id INTEGER NOT NULL REFERENCES categories (id),
    name        TEXT    NOT NULL,
    amount      INTEGER NOT NULL,
    price       REAL    NOT NULL
);

CREATE TABLE IF NOT EXISTS users (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    name         TEXT    NOT NULL,
    phone_number TEXT    NOT NULL,
    is_deleted   INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS user_roles (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users (id),
    shop_id INTEGER NOT NULL REFERENCES shops (id),
    role    TEXT    NOT NULL,
    UNIQUE (user_id, shop_id)
);
";
