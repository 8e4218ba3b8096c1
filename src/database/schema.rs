//! Schema setup for the directory database and tenant partitions.
//!
//! Partitions are provisioned by the super admin as bare databases; the
//! record-kind tables are registered on first connect, the same way the
//! observed system registered its collections on each dynamic connection.

use sqlx::PgPool;

/// Tenant directory table, lives in the shared directory database only.
pub async fn ensure_directory_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tenants (
            id            UUID PRIMARY KEY,
            name          TEXT NOT NULL,
            username      TEXT NOT NULL,
            password      TEXT NOT NULL,
            partition_url TEXT NOT NULL,
            port          TEXT,
            api_key       TEXT,
            created_at    TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Record-kind tables, registered on every tenant partition.
pub async fn ensure_partition_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS areas (
            id         UUID PRIMARY KEY,
            tenant_id  UUID NOT NULL,
            name       TEXT NOT NULL,
            kind       TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS centers (
            id                          UUID PRIMARY KEY,
            area_id                     UUID NOT NULL,
            name                        TEXT NOT NULL,
            location                    TEXT NOT NULL,
            map_link                    TEXT,
            image_url                   TEXT,
            presiding_officer           JSONB NOT NULL,
            assistant_presiding_officer JSONB NOT NULL,
            police_officer              JSONB NOT NULL,
            category                    TEXT,
            comment                     TEXT,
            created_at                  TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // seq pins insertion order so equal ranks list stably
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contacts (
            id          UUID PRIMARY KEY,
            name        TEXT NOT NULL,
            designation TEXT NOT NULL,
            phone       TEXT NOT NULL,
            category    TEXT NOT NULL,
            rank        INTEGER NOT NULL DEFAULT 0,
            seq         BIGSERIAL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS symbols (
            id        UUID PRIMARY KEY,
            name      TEXT NOT NULL,
            party     TEXT NOT NULL,
            nominee   TEXT NOT NULL,
            image_url TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
