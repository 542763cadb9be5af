//! Shared SQLite PRAGMA bootstrap for sink connections

use rusqlite::Connection;

/// Apply the connection settings every sink connection runs with:
/// WAL journaling with a 1000-page autocheckpoint, NORMAL sync,
/// in-memory temp store and a modest mmap/cache budget.
pub fn apply_optimized_pragmas(conn: &Connection) -> rusqlite::Result<()> {
    // Partition connections share the file; wait out short write locks
    conn.pragma_update(None, "busy_timeout", 5000i64)?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    conn.pragma_update(None, "temp_store", "MEMORY")?;
    conn.pragma_update(None, "mmap_size", 268_435_456i64)?;
    conn.pragma_update(None, "cache_size", -64_000i64)?;
    conn.pragma_update(None, "wal_autocheckpoint", 1000i64)?;
    Ok(())
}
