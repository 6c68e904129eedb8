#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use pomo::db::intervals::Intervals;
    use pomo::db::memory::MemoryIntervals;
    use pomo::db::repository::Repository;
    use pomo::libs::error::PomodoroError;
    use pomo::libs::interval::{Category, Interval, State};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Both backends, the SQLite one in a fresh temporary directory.
    struct RepositoryTestContext {
        temp_dir: TempDir,
        sqlite: Intervals,
        memory: MemoryIntervals,
    }

    impl TestContext for RepositoryTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let sqlite = Intervals::open(temp_dir.path().join("pomo.db")).unwrap();
            RepositoryTestContext {
                temp_dir,
                sqlite,
                memory: MemoryIntervals::new(),
            }
        }
    }

    impl RepositoryTestContext {
        fn backends(&self) -> [(&str, &dyn Repository); 2] {
            [("sqlite", &self.sqlite as &dyn Repository), ("memory", &self.memory as &dyn Repository)]
        }
    }

    fn add(repo: &dyn Repository, category: Category, actual_secs: i64, state: State) -> Interval {
        let mut interval = Interval::new(category, Duration::minutes(25));
        interval.id = repo.create(&interval).unwrap();
        interval.actual_duration = Duration::seconds(actual_secs);
        interval.state = state;
        repo.update(&interval).unwrap();
        interval
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_create_and_read_back(ctx: &mut RepositoryTestContext) {
        for (name, repo) in ctx.backends() {
            let interval = Interval::new(Category::ShortBreak, Duration::minutes(5));
            let id = repo.create(&interval).unwrap();
            assert!(id > 0, "{name}");

            let stored = repo.by_id(id).unwrap();
            assert_eq!(stored.id, id, "{name}");
            assert_eq!(stored.category, Category::ShortBreak, "{name}");
            assert_eq!(stored.state, State::NotStarted, "{name}");
            assert_eq!(stored.planned_duration, Duration::minutes(5), "{name}");
            assert_eq!(stored.actual_duration, Duration::zero(), "{name}");
            assert_eq!(stored.start_time.timestamp(), interval.start_time.timestamp(), "{name}");
        }
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_ids_are_sequential(ctx: &mut RepositoryTestContext) {
        for (name, repo) in ctx.backends() {
            let interval = Interval::new(Category::Pomodoro, Duration::minutes(25));
            let first = repo.create(&interval).unwrap();
            let second = repo.create(&interval).unwrap();
            let third = repo.create(&interval).unwrap();
            assert_eq!((second, third), (first + 1, first + 2), "{name}");
        }
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_update_persists_progress_and_state(ctx: &mut RepositoryTestContext) {
        for (name, repo) in ctx.backends() {
            let interval = add(repo, Category::Pomodoro, 42, State::Paused);

            let stored = repo.by_id(interval.id).unwrap();
            assert_eq!(stored.actual_duration, Duration::seconds(42), "{name}");
            assert_eq!(stored.state, State::Paused, "{name}");
        }
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_update_keeps_creation_fields(ctx: &mut RepositoryTestContext) {
        for (name, repo) in ctx.backends() {
            let original = Interval::new(Category::Pomodoro, Duration::minutes(25));
            let id = repo.create(&original).unwrap();

            let mut changed = repo.by_id(id).unwrap();
            changed.category = Category::LongBreak;
            changed.planned_duration = Duration::minutes(1);
            changed.start_time = original.start_time - Duration::days(2);
            changed.actual_duration = Duration::seconds(30);
            changed.state = State::Running;
            repo.update(&changed).unwrap();

            let stored = repo.by_id(id).unwrap();
            assert_eq!(stored.category, Category::Pomodoro, "{name}");
            assert_eq!(stored.planned_duration, Duration::minutes(25), "{name}");
            assert_eq!(stored.start_time.timestamp(), original.start_time.timestamp(), "{name}");
            assert_eq!(stored.actual_duration, Duration::seconds(30), "{name}");
            assert_eq!(stored.state, State::Running, "{name}");
        }
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_concurrent_writers(ctx: &mut RepositoryTestContext) {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 25;

        for (name, repo) in ctx.backends() {
            let mut ids: Vec<i64> = std::thread::scope(|scope| {
                let workers: Vec<_> = (0..THREADS)
                    .map(|_| {
                        scope.spawn(move || {
                            (0..PER_THREAD)
                                .map(|n| {
                                    let mut interval = Interval::new(Category::Pomodoro, Duration::minutes(25));
                                    interval.id = repo.create(&interval).unwrap();
                                    interval.actual_duration = Duration::seconds(n as i64 + 1);
                                    interval.state = State::Running;
                                    repo.update(&interval).unwrap();
                                    repo.by_id(interval.id).unwrap();
                                    interval.id
                                })
                                .collect::<Vec<i64>>()
                        })
                    })
                    .collect();
                workers.into_iter().flat_map(|worker| worker.join().unwrap()).collect()
            });

            ids.sort_unstable();
            let first = ids[0];
            let expected: Vec<i64> = (first..first + (THREADS * PER_THREAD) as i64).collect();
            assert_eq!(ids, expected, "{name}");
            assert_eq!(repo.last().unwrap().id, first + (THREADS * PER_THREAD) as i64 - 1, "{name}");
            assert_eq!(repo.last().unwrap().state, State::Running, "{name}");
        }
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_unknown_ids_are_rejected(ctx: &mut RepositoryTestContext) {
        for (name, repo) in ctx.backends() {
            assert!(matches!(repo.by_id(0), Err(PomodoroError::InvalidId(0))), "{name}");
            assert!(matches!(repo.by_id(99), Err(PomodoroError::InvalidId(99))), "{name}");

            let unsaved = Interval::new(Category::Pomodoro, Duration::minutes(25));
            assert!(matches!(repo.update(&unsaved), Err(PomodoroError::InvalidId(0))), "{name}");

            let mut missing = unsaved.clone();
            missing.id = 99;
            assert!(matches!(repo.update(&missing), Err(PomodoroError::InvalidId(99))), "{name}");
        }
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_last_on_empty_store(ctx: &mut RepositoryTestContext) {
        for (name, repo) in ctx.backends() {
            assert!(matches!(repo.last(), Err(PomodoroError::NoIntervals)), "{name}");
            assert!(repo.breaks(3).unwrap().is_empty(), "{name}");
        }
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_last_returns_most_recent(ctx: &mut RepositoryTestContext) {
        for (name, repo) in ctx.backends() {
            add(repo, Category::Pomodoro, 0, State::Done);
            let latest = add(repo, Category::ShortBreak, 0, State::Running);

            let last = repo.last().unwrap();
            assert_eq!(last.id, latest.id, "{name}");
            assert_eq!(last.state, State::Running, "{name}");
        }
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_breaks_newest_first(ctx: &mut RepositoryTestContext) {
        for (name, repo) in ctx.backends() {
            let b1 = add(repo, Category::ShortBreak, 0, State::Done);
            add(repo, Category::Pomodoro, 0, State::Done);
            let b2 = add(repo, Category::LongBreak, 0, State::Cancelled);
            add(repo, Category::Pomodoro, 0, State::Done);
            let b3 = add(repo, Category::ShortBreak, 0, State::Done);
            add(repo, Category::Pomodoro, 0, State::Done);

            let ids: Vec<i64> = repo.breaks(3).unwrap().iter().map(|i| i.id).collect();
            assert_eq!(ids, vec![b3.id, b2.id, b1.id], "{name}");

            let ids: Vec<i64> = repo.breaks(2).unwrap().iter().map(|i| i.id).collect();
            assert_eq!(ids, vec![b3.id, b2.id], "{name}");

            assert_eq!(repo.breaks(10).unwrap().len(), 3, "{name}");
        }
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_category_summary(ctx: &mut RepositoryTestContext) {
        let today = Local::now().date_naive();
        for (name, repo) in ctx.backends() {
            add(repo, Category::Pomodoro, 1500, State::Done);
            add(repo, Category::ShortBreak, 300, State::Done);
            add(repo, Category::Pomodoro, 600, State::Cancelled);
            add(repo, Category::LongBreak, 900, State::Done);

            assert_eq!(repo.category_summary(today, "Pomodoro").unwrap(), Duration::seconds(2100), "{name}");
            assert_eq!(repo.category_summary(today, "%Break").unwrap(), Duration::seconds(1200), "{name}");
            assert_eq!(repo.category_summary(today, "Break").unwrap(), Duration::seconds(1200), "{name}");
            assert_eq!(repo.category_summary(today, "ShortBreak").unwrap(), Duration::seconds(300), "{name}");
            assert_eq!(repo.category_summary(today, "pomodoro").unwrap(), Duration::zero(), "{name}");
        }
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_category_summary_other_days(ctx: &mut RepositoryTestContext) {
        let today = Local::now().date_naive();
        for (name, repo) in ctx.backends() {
            let mut yesterday = Interval::new(Category::Pomodoro, Duration::minutes(25));
            yesterday.start_time = Local::now() - Duration::days(1);
            yesterday.id = repo.create(&yesterday).unwrap();
            yesterday.actual_duration = Duration::minutes(25);
            repo.update(&yesterday).unwrap();

            assert_eq!(repo.category_summary(today, "Pomodoro").unwrap(), Duration::zero(), "{name}");
            assert_eq!(
                repo.category_summary(yesterday.start_time.date_naive(), "Pomodoro").unwrap(),
                Duration::minutes(25),
                "{name}"
            );
        }
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_sqlite_history_survives_reopen(ctx: &mut RepositoryTestContext) {
        let path = ctx.temp_dir.path().join("reopen.db");
        let id = {
            let repo = Intervals::open(&path).unwrap();
            add(&repo, Category::LongBreak, 60, State::Done).id
        };

        let repo = Intervals::open(&path).unwrap();
        let stored = repo.by_id(id).unwrap();
        assert_eq!(stored.category, Category::LongBreak);
        assert_eq!(stored.actual_duration, Duration::seconds(60));
        assert_eq!(stored.state, State::Done);
    }
}
