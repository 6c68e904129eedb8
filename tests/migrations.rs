#[cfg(test)]
mod tests {
    use pomo::db::db::Db;
    use pomo::db::migrations::MigrationManager;
    use rusqlite::Connection;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl MigrationTestContext {
        fn connection(&self) -> Connection {
            Connection::open(self.temp_dir.path().join("pomo.db")).unwrap()
        }
    }

    fn applied(conn: &Connection) -> Vec<(u32, String)> {
        let mut stmt = conn.prepare("SELECT version, name FROM migrations ORDER BY version").unwrap();
        stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_on_open(ctx: &mut MigrationTestContext) {
        let db = Db::open(ctx.temp_dir.path().join("pomo.db")).unwrap();

        let tables: i64 = db
            .conn
            .query_row("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'intervals'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(tables, 1);

        let versions: Vec<u32> = applied(&db.conn).into_iter().map(|(version, _)| version).collect();
        assert_eq!(versions, vec![1, 2]);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_recorded_in_order(ctx: &mut MigrationTestContext) {
        let mut conn = ctx.connection();
        MigrationManager::new().run_migrations(&mut conn).unwrap();

        assert_eq!(
            applied(&conn),
            vec![(1, "create_intervals".to_string()), (2, "add_interval_indices".to_string())]
        );
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        let mut conn = ctx.connection();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        manager.run_migrations(&mut conn).unwrap();
        assert_eq!(applied(&conn).len(), 2);

        drop(conn);
        Db::open(ctx.temp_dir.path().join("pomo.db")).unwrap();
        assert_eq!(applied(&ctx.connection()).len(), 2);
    }
}
