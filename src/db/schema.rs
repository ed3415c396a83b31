pub(crate) const SCHEMA_V2: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS settings (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS expenses (
    key    TEXT PRIMARY KEY,
    amount INTEGER NOT NULL DEFAULT 0,
    icon   TEXT,
    name   TEXT NOT NULL DEFAULT ''
);
"#;

/// Version 1 stored each expense as one packed label (icon, space, name).
#[cfg(test)]
pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS settings (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS expenses (
    label  TEXT PRIMARY KEY,
    amount INTEGER NOT NULL DEFAULT 0
);
"#;

pub(crate) const CURRENT_VERSION: i32 = 2;

/// Migrations from version N to N+1.
/// Each entry is (from_version, sql).
pub(crate) const MIGRATIONS: &[(i32, &str)] = &[(
    1,
    "ALTER TABLE expenses RENAME COLUMN label TO key;
     ALTER TABLE expenses ADD COLUMN icon TEXT;
     ALTER TABLE expenses ADD COLUMN name TEXT NOT NULL DEFAULT '';",
)];
